use std::iter;

use thiserror::Error;

use crate::schedule::MonthSchedule;
use crate::time::WorkingDuration;
use crate::verifier::Verifier;

/// Verifies that the entries add up to the requested working time.
pub struct VerifyTotal;

#[derive(Debug, Clone, Error, PartialEq)]
#[error("the entries add up to {worked}, but {expected} were requested")]
pub struct WrongTotal {
    expected: WorkingDuration,
    worked: WorkingDuration,
}

impl Verifier for VerifyTotal {
    type Error = WrongTotal;
    type Errors = iter::Once<Self::Error>;

    fn verify(&self, schedule: &MonthSchedule) -> Result<(), Self::Errors> {
        let worked = schedule.worked_time();

        if worked != schedule.total() {
            return Err(iter::once(WrongTotal {
                expected: schedule.total(),
                worked,
            }));
        }

        Ok(())
    }
}
