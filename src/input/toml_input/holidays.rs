use serde::Deserialize;

use crate::schedule::HolidayRegion;
use crate::time::Date;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Holidays {
    #[serde(default)]
    state: HolidayRegion,
    /// Additional days without work, like vacation.
    #[serde(default)]
    excluded: Vec<Date>,
}

impl Holidays {
    #[must_use]
    pub fn state(&self) -> HolidayRegion {
        self.state
    }

    #[must_use]
    pub fn excluded(&self) -> &[Date] {
        &self.excluded
    }
}
