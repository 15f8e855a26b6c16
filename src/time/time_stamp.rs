use std::str::FromStr;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::time::WorkingDuration;

#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{:02}:{:02}", hour, minute)]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidTime {
    #[error("Time is not valid: {hour:02}:{minute:02}")]
    OutOfRange { hour: u32, minute: u32 },
    #[error("\"{0}\" is not a valid time. Expected format: \"HH:MM\"")]
    Parse(String),
}

#[macro_export]
macro_rules! time_stamp {
    ( $hour:literal : $minute:literal ) => {{
        $crate::static_assertions::const_assert!($hour < 24);
        $crate::static_assertions::const_assert!($minute < 60);

        $crate::time::TimeStamp::from_minutes(($hour as u32) * 60 + ($minute as u32))
    }};
}

impl TimeStamp {
    /// The number of minutes in a day, the first value that is not a valid `TimeStamp`.
    const MINUTES_PER_DAY: u32 = 24 * 60;

    pub fn new(hour: u32, minute: u32) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime::OutOfRange { hour, minute });
        }

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// # Panics
    ///
    /// If `minutes` is not before 24:00.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        assert!(minutes < Self::MINUTES_PER_DAY, "time stamp must be before 24:00");

        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour as u32
    }

    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute as u32
    }

    // the maximum TimeStamp is 23:59, which would be 23 * 60 + 59 = 1439
    #[must_use]
    pub const fn as_minutes(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Returns the time after `duration` has passed or `None` if that would be on the next day.
    #[must_use]
    pub const fn checked_add(self, duration: WorkingDuration) -> Option<Self> {
        let minutes = self.as_minutes() + duration.as_mins();

        if minutes >= Self::MINUTES_PER_DAY {
            None
        } else {
            Some(Self::from_minutes(minutes))
        }
    }

    /// Returns the time between `self` and `other`, regardless of which one is earlier.
    #[must_use]
    pub fn elapsed(&self, other: &Self) -> WorkingDuration {
        WorkingDuration::from_mins(self.as_minutes().abs_diff(other.as_minutes()))
    }
}

impl FromStr for TimeStamp {
    type Err = InvalidTime;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let parse_error = || InvalidTime::Parse(string.to_string());
        let (hour, minute) = string.trim().split_once(':').ok_or_else(parse_error)?;

        Self::new(
            hour.parse().map_err(|_| parse_error())?,
            minute.parse().map_err(|_| parse_error())?,
        )
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for TimeStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
