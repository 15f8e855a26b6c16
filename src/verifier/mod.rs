use crate::schedule::{HolidaySource, MonthSchedule, ScheduleOptions};

mod verifier;
mod verify_dates;
mod verify_time;
mod verify_total;

pub use verifier::Verifier;
pub use verify_dates::*;
pub use verify_time::*;
pub use verify_total::*;

/// Runs all verifiers and collects every error they report.
pub struct DefaultVerifier<'a, H: ?Sized> {
    options: &'a ScheduleOptions,
    excluded: &'a H,
}

impl<'a, H: HolidaySource + ?Sized> DefaultVerifier<'a, H> {
    pub fn new(options: &'a ScheduleOptions, excluded: &'a H) -> Self {
        Self { options, excluded }
    }
}

impl<'a, H: HolidaySource + ?Sized> Verifier for DefaultVerifier<'a, H> {
    type Error = anyhow::Error;
    type Errors = Vec<Self::Error>;

    fn verify(&self, schedule: &MonthSchedule) -> Result<(), Self::Errors> {
        let mut errors: Self::Errors = Vec::new();

        if let Err(found) = VerifyTotal.verify(schedule) {
            errors.extend(found.into_iter().map(Into::into));
        }

        if let Err(found) = VerifyDates::new(self.options, self.excluded).verify(schedule) {
            errors.extend(found.into_iter().map(Into::into));
        }

        if let Err(found) = VerifyTime::new(self.options.latest_end).verify(schedule) {
            errors.extend(found.into_iter().map(Into::into));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
