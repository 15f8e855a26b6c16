use std::fmt;
use std::fmt::Debug;

use crate::schedule::MonthSchedule;

/// Checks a generated schedule after it has been built.
pub trait Verifier {
    type Error: fmt::Display + Debug + Sync + Send + 'static;
    type Errors: IntoIterator<Item = Self::Error>;

    fn verify(&self, schedule: &MonthSchedule) -> Result<(), Self::Errors>;
}

impl<V: Verifier + ?Sized> Verifier for &V {
    type Error = V::Error;
    type Errors = V::Errors;

    fn verify(&self, schedule: &MonthSchedule) -> Result<(), Self::Errors> {
        (**self).verify(schedule)
    }
}
