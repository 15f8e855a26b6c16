use core::fmt;
use core::ops::{Add, AddAssign, Sub};
use core::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{holiday, Month, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        $crate::static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        $crate::static_assertions::const_assert!($day != 0);
        $crate::static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// # Safety
    ///
    /// The day must exist in the given month of the year.
    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    /// Returns the date of the first day as a date in the month.
    #[must_use]
    pub const fn first_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: 1,
        }
    }

    #[must_use]
    const fn from_ordinal(year: Year, ordinal: usize) -> Self {
        let mut month = Month::January;
        let mut day = ordinal;

        while day > year.number_of_days_in_month(month) {
            day -= year.number_of_days_in_month(month);
            month = month.next();
        }

        Self { year, month, day }
    }

    #[must_use]
    const fn from_days_since_base_date(days: usize) -> Self {
        let year = Year::from_days_since_base_date(days);
        // NOTE: +1 because the ordinal of the first day of the year is 1 and not 0
        Self::from_ordinal(year, days - year.days_since_base_date() + 1)
    }
}

impl Date {
    /// Returns the current date in UTC, taken from the system clock.
    #[must_use]
    pub fn today() -> Self {
        let days_since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs() / (24 * 60 * 60));

        crate::date!(1970:01:01).add_days(days_since_epoch as usize)
    }

    /// Replaces `{year}`, `{year:02}`, `{month}` and `{day}` in the format string.
    ///
    /// ```
    /// # use timeforge::date;
    /// assert_eq!(date!(2023:04:03).formatted("{day}.{month}.{year:02}"), "03.04.23");
    /// ```
    pub fn formatted(&self, f: &str) -> String {
        f.replace("{year}", &format!("{:04}", self.year()))
            .replace("{year:02}", &format!("{:02}", self.year().as_usize() % 100))
            .replace("{month}", &format!("{:02}", self.month()))
            .replace("{day}", &format!("{:02}", self.day()))
    }
}

impl Date {
    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    pub const fn is_holiday(&self) -> bool {
        holiday::is_holiday(*self)
    }

    #[must_use]
    pub const fn first_day_of_next_month(&self) -> Self {
        if self.month().is_eq(&Month::December) {
            Self::first_day(self.year().next(), Month::January)
        } else {
            Self::first_day(self.year(), self.month().next())
        }
    }

    #[must_use]
    const fn ordinal(&self) -> usize {
        let mut result = self.day();
        let mut month = Month::January;

        while !month.is_eq(&self.month()) {
            result += self.year().number_of_days_in_month(month);
            month = month.next();
        }

        result
    }

    #[must_use]
    const fn days_since_base_date(&self) -> usize {
        // the ordinal of the first day of the year is 1, so one has to subtract 1
        self.year.days_since_base_date() + self.ordinal() - 1
    }

    #[must_use]
    pub const fn add_days(self, days: usize) -> Self {
        Self::from_days_since_base_date(self.days_since_base_date() + days)
    }

    /// # Panics
    ///
    /// If the result would be before 0000-01-01.
    #[must_use]
    pub const fn sub_days(self, days: usize) -> Self {
        Self::from_days_since_base_date(self.days_since_base_date() - days)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl Add<usize> for Date {
    type Output = Self;

    fn add(self, days: usize) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<usize> for Date {
    type Output = Self;

    fn sub(self, days: usize) -> Self::Output {
        self.sub_days(days)
    }
}

impl AddAssign<usize> for Date {
    fn add_assign(&mut self, days: usize) {
        *self = self.add_days(days);
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str, whole: &str) -> Result<usize, InvalidDate> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: whole.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year, string)?);
            let month = Month::try_from(parse_or_err(month, string)?).map_err(|_| {
                InvalidDate::ParseDateError {
                    input: string.to_string(),
                }
            })?;
            let day = parse_or_err(day, string)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}
