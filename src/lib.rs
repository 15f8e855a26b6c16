mod utils;

pub mod form;
pub mod input;
pub mod schedule;
pub mod time;
pub mod verifier;

#[doc(hidden)]
pub use static_assertions;

use std::fs;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::form::FormFields;
use crate::input::Config;
use crate::schedule::{MonthSchedule, MonthScheduleBuilder};
use crate::verifier::{DefaultVerifier, Verifier};

/// Generates and verifies the schedule described by the config.
pub fn generate_schedule<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
) -> anyhow::Result<MonthSchedule> {
    let excluded = config.excluded();
    let schedule = MonthScheduleBuilder::new(
        config.year(),
        config.month(),
        config.working_time(),
        config.job(),
        &excluded,
    )
    .options(config.options().clone())
    .build(rng)?;

    if let Err(errors) = DefaultVerifier::new(config.options(), &excluded).verify(&schedule) {
        for error in &errors {
            warn!("{}", error);
        }

        return Err(anyhow::anyhow!(
            "the generated schedule failed {} checks",
            errors.len()
        ));
    }

    Ok(schedule)
}

/// Generates the schedule and writes the form fields to the output of the config.
pub fn generate_time_sheet(config: &Config) -> anyhow::Result<MonthSchedule> {
    let seed = config.seed().unwrap_or_else(|| rand::thread_rng().gen());
    debug!("seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    info!(
        "generating {} of work for {:04}-{:02}",
        config.working_time(),
        config.year().as_usize(),
        config.month().as_usize()
    );
    let schedule = generate_schedule(config, &mut rng)?;
    info!("worked: {} on {} days", schedule.worked_time(), schedule.len());
    debug!("{}", schedule);

    let output = config.output();
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    FormFields::new(config, &schedule).write_json(output)?;
    info!("wrote form fields to `{}`", output.display());

    Ok(schedule)
}
