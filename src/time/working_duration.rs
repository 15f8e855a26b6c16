use core::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

/// An amount of time with minute precision, displayed as `HH:MM`.
///
/// Unlike [`TimeStamp`](crate::time::TimeStamp) the hours are not limited to a day,
/// so the working time of a whole month fits into it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WorkingDuration {
    mins: u32,
}

impl fmt::Display for WorkingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidWorkingDuration {
    #[error("Duration is not valid: {hours:02}:{minutes:02}")]
    OutOfRange { hours: u32, minutes: u32 },
    #[error("\"{0}\" is not a valid duration. Expected \"HH:MM\" or a number of hours like \"7.5\"")]
    Parse(String),
}

#[macro_export]
macro_rules! working_duration {
    ( $hours:literal : $mins:literal ) => {{
        $crate::static_assertions::const_assert!($mins < 60);

        $crate::time::WorkingDuration::from_mins(($hours as u32) * 60 + ($mins as u32))
    }};
}

impl WorkingDuration {
    pub fn new(hours: u32, minutes: u32) -> Result<Self, InvalidWorkingDuration> {
        if minutes >= 60 {
            return Err(InvalidWorkingDuration::OutOfRange { hours, minutes });
        }

        hours
            .checked_mul(60)
            .and_then(|mins| mins.checked_add(minutes))
            .map(Self::from_mins)
            .ok_or(InvalidWorkingDuration::OutOfRange { hours, minutes })
    }

    #[must_use]
    pub const fn from_mins(mins: u32) -> Self {
        Self { mins }
    }

    /// Converts a fractional number of hours, rounded to the nearest minute.
    pub fn from_hours_f64(hours: f64) -> Result<Self, InvalidWorkingDuration> {
        let mins = (hours * 60.0).round();
        if !mins.is_finite() || mins < 0.0 || mins > f64::from(u32::MAX) {
            return Err(InvalidWorkingDuration::Parse(hours.to_string()));
        }

        Ok(Self::from_mins(mins as u32))
    }

    #[must_use]
    pub const fn as_mins(&self) -> u32 {
        self.mins
    }

    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.mins / 60
    }

    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.mins % 60
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.mins == 0
    }

    #[must_use]
    pub fn as_hours_f64(&self) -> f64 {
        f64::from(self.mins) / 60.0
    }

    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.mins.checked_sub(other.mins) {
            Some(mins) => Some(Self::from_mins(mins)),
            None => None,
        }
    }
}

impl FromStr for WorkingDuration {
    type Err = InvalidWorkingDuration;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.trim();
        let parse_error = || InvalidWorkingDuration::Parse(string.to_string());

        if let Some((hours, minutes)) = string.split_once(':') {
            let hours = hours.parse::<u32>().map_err(|_| parse_error())?;
            let minutes = minutes.parse::<u32>().map_err(|_| parse_error())?;

            return Self::new(hours, minutes);
        }

        let hours = string.parse::<f64>().map_err(|_| parse_error())?;
        Self::from_hours_f64(hours).map_err(|_| parse_error())
    }
}

struct WorkingDurationVisitor;

impl<'de> de::Visitor<'de> for WorkingDurationVisitor {
    type Value = WorkingDuration;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a duration like \"07:30\" or a number of hours")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        WorkingDuration::from_str(value).map_err(de::Error::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u32::try_from(value)
            .ok()
            .and_then(|hours| hours.checked_mul(60))
            .map(WorkingDuration::from_mins)
            .ok_or_else(|| de::Error::custom(format!("{} hours is too large", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        let value = u64::try_from(value)
            .map_err(|_| de::Error::custom(format!("negative duration: {}", value)))?;
        self.visit_u64(value)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        WorkingDuration::from_hours_f64(value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for WorkingDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(WorkingDurationVisitor)
    }
}

impl Serialize for WorkingDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl Add for WorkingDuration {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::from_mins(self.mins + other.mins)
    }
}

impl AddAssign for WorkingDuration {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for WorkingDuration {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::from_mins(self.mins - other.mins)
    }
}

impl SubAssign for WorkingDuration {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<u32> for WorkingDuration {
    type Output = Self;

    fn mul(self, factor: u32) -> Self::Output {
        Self::from_mins(self.mins * factor)
    }
}

impl Sum for WorkingDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a WorkingDuration> for WorkingDuration {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
