use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    #[must_use]
    pub const fn week_days() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub(crate) const fn is_eq(&self, other: &Self) -> bool {
        self.as_usize() == other.as_usize()
    }

    /// Returns the weekday that is `days` after this one.
    #[must_use]
    pub const fn add_const(self, days: usize) -> Self {
        Self::week_days()[(self.as_usize() - 1 + days % 7) % 7]
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weekday \"{0}\"")]
pub struct InvalidWeekDay(String);

impl FromStr for WeekDay {
    type Err = InvalidWeekDay;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let lowercase = string.trim().to_lowercase();

        Self::week_days()
            .into_iter()
            .find(|day| day.name() == lowercase || day.name()[..3] == lowercase)
            .ok_or_else(|| InvalidWeekDay(string.to_string()))
    }
}

impl TryFrom<String> for WeekDay {
    type Error = InvalidWeekDay;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}
