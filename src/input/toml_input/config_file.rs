use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::input::toml_input::{About, Contract, Holidays};
use crate::schedule::ScheduleOptions;
use crate::utils;

/// The contents of a config file, every section can be omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    about: About,
    #[serde(default)]
    contract: Contract,
    #[serde(default)]
    generator: ScheduleOptions,
    #[serde(default)]
    holidays: Holidays,
}

impl ConfigFile {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = utils::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;

        toml::from_str(&content).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    #[must_use]
    pub fn about(&self) -> &About {
        &self.about
    }

    #[must_use]
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    #[must_use]
    pub fn generator(&self) -> &ScheduleOptions {
        &self.generator
    }

    #[must_use]
    pub fn holidays(&self) -> &Holidays {
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::schedule::HolidayRegion;
    use crate::{date, working_duration};

    #[test]
    fn test_parse_full_file() {
        let file: ConfigFile = toml::from_str(
            r#"
            [about]
            name = "Mustermann, Max"
            staff_id = 1234567
            organisation = "ITI"

            [contract]
            working_time = "40:00"
            wage = 12.41
            job = "Tutorium"

            [generator]
            max_start = "11:00"

            [holidays]
            state = "none"
            excluded = ["2023-05-02", "2023-05-03"]
            "#,
        )
        .unwrap();

        assert_eq!(file.about().name(), Some("Mustermann, Max"));
        assert_eq!(file.about().staff_id(), Some(1234567));
        assert_eq!(file.about().organisation(), Some("ITI"));
        assert_eq!(file.contract().working_time(), Some(working_duration!(40:00)));
        assert_eq!(file.contract().wage(), Some(12.41));
        assert_eq!(file.contract().job(), Some("Tutorium"));
        assert_eq!(file.generator().max_start, Some(crate::time_stamp!(11:00)));
        assert_eq!(file.holidays().state(), HolidayRegion::None);
        assert_eq!(
            file.holidays().excluded(),
            &[date!(2023:05:02), date!(2023:05:03)]
        );
    }

    #[test]
    fn test_parse_empty_file() {
        let file: ConfigFile = toml::from_str("").unwrap();

        assert_eq!(file, ConfigFile::default());
        assert_eq!(file.holidays().state(), HolidayRegion::BadenWuerttemberg);
    }

    #[test]
    fn test_reject_unknown_section() {
        assert!(toml::from_str::<ConfigFile>("[mail]\nsmtp = \"example.com\"").is_err());
    }
}
