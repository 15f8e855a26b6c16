use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::input::toml_input::ConfigFile;
use crate::schedule::{HolidayRegion, HolidaySource, ScheduleOptions};
use crate::time::{Date, Month, WorkingDuration, Year};

/// Everything that is needed to generate a time sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    name: String,
    staff_id: usize,
    organisation: String,
    year: Year,
    month: Month,
    working_time: WorkingDuration,
    wage: f64,
    job: String,
    options: ScheduleOptions,
    region: HolidayRegion,
    excluded: BTreeSet<Date>,
    output: PathBuf,
    seed: Option<u64>,
}

/// Merges the config file with values given on the command line.
///
/// Values that are set on the builder take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    file: ConfigFile,
    name: Option<String>,
    staff_id: Option<usize>,
    organisation: Option<String>,
    year: Option<Year>,
    month: Option<Month>,
    working_time: Option<WorkingDuration>,
    wage: Option<f64>,
    job: Option<String>,
    output: Option<PathBuf>,
    seed: Option<u64>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_file(file: ConfigFile) -> Self {
        Self {
            file,
            ..Self::default()
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Ok(Self::from_file(ConfigFile::from_file(path)?))
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn staff_id(&mut self, staff_id: usize) -> &mut Self {
        self.staff_id = Some(staff_id);
        self
    }

    pub fn organisation(&mut self, organisation: impl Into<String>) -> &mut Self {
        self.organisation = Some(organisation.into());
        self
    }

    pub fn year(&mut self, year: Year) -> &mut Self {
        self.year = Some(year);
        self
    }

    pub fn month(&mut self, month: Month) -> &mut Self {
        self.month = Some(month);
        self
    }

    pub fn working_time(&mut self, working_time: WorkingDuration) -> &mut Self {
        self.working_time = Some(working_time);
        self
    }

    pub fn wage(&mut self, wage: f64) -> &mut Self {
        self.wage = Some(wage);
        self
    }

    pub fn job(&mut self, job: impl Into<String>) -> &mut Self {
        self.job = Some(job.into());
        self
    }

    pub fn output(&mut self, output: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Resolves the final config, the month and year default to the current ones.
    pub fn build(self) -> anyhow::Result<Config> {
        let missing = |name: &str| {
            anyhow::anyhow!(
                "missing required value `{}`, set it in the config file or pass it as a flag",
                name
            )
        };

        let about = self.file.about();
        let contract = self.file.contract();

        let today = Date::today();
        let year = self.year.unwrap_or(today.year());
        let month = self.month.unwrap_or(today.month());

        let wage = self.wage.or(contract.wage()).ok_or_else(|| missing("wage"))?;
        if !wage.is_finite() || wage < 0.0 {
            return Err(anyhow::anyhow!(
                "the wage must be a positive number, got {}",
                wage
            ));
        }

        let output = self.output.unwrap_or_else(|| {
            PathBuf::from(format!(
                "{:04}-{:02}.json",
                year.as_usize(),
                month.as_usize()
            ))
        });

        Ok(Config {
            name: self
                .name
                .or_else(|| about.name().map(ToString::to_string))
                .ok_or_else(|| missing("name"))?,
            staff_id: self
                .staff_id
                .or(about.staff_id())
                .ok_or_else(|| missing("staff_id"))?,
            organisation: self
                .organisation
                .or_else(|| about.organisation().map(ToString::to_string))
                .ok_or_else(|| missing("organisation"))?,
            year,
            month,
            working_time: self
                .working_time
                .or(contract.working_time())
                .ok_or_else(|| missing("working_time"))?,
            wage,
            job: self
                .job
                .or_else(|| contract.job().map(ToString::to_string))
                .ok_or_else(|| missing("job"))?,
            options: self.file.generator().clone(),
            region: self.file.holidays().state(),
            excluded: self.file.holidays().excluded().iter().copied().collect(),
            output,
            seed: self.seed,
        })
    }
}

impl Config {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn staff_id(&self) -> usize {
        self.staff_id
    }

    #[must_use]
    pub fn organisation(&self) -> &str {
        &self.organisation
    }

    #[must_use]
    pub fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> Month {
        self.month
    }

    /// How long has to be worked in the month.
    #[must_use]
    pub fn working_time(&self) -> WorkingDuration {
        self.working_time
    }

    #[must_use]
    pub fn wage(&self) -> f64 {
        self.wage
    }

    #[must_use]
    pub fn job(&self) -> &str {
        &self.job
    }

    #[must_use]
    pub fn options(&self) -> &ScheduleOptions {
        &self.options
    }

    #[must_use]
    pub fn region(&self) -> HolidayRegion {
        self.region
    }

    /// The dates that can not be worked on: public holidays of the region
    /// and the excluded dates from the config file.
    #[must_use]
    pub fn excluded(&self) -> impl HolidaySource + '_ {
        (self.region, &self.excluded)
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
