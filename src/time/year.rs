use std::ops::Add;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::iter_const;
use crate::time::{Date, Month, WeekDay};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(from = "usize")]
#[serde(into = "usize")]
#[display("{}", _0)]
pub struct Year(usize);

/// The number of days from start_month..end_month in the `year`.
const fn days_for_months(year: Year, start_month: Month, end_month: usize) -> usize {
    let mut result = 0;

    iter_const!(for month in start_month.as_usize(),..end_month => {
        result += year.number_of_days_in_month(Month::new(month));
    });

    result
}

impl Year {
    /// Choose the date 0000/01/01 as a base date, because it does not make sense to go past this date.
    const BASE_DATE: (Self, Month, usize, WeekDay) =
        (Self(0), Month::January, 1, WeekDay::Saturday);

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        let year = self.as_usize();
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let (_, month_ref, day_ref, week_day_ref) = Self::BASE_DATE;

        let days = self.days_since_base_date()
            + days_for_months(*self, month_ref, month.as_usize())
            + (day - day_ref);

        week_day_ref.add_const(days)
    }

    /// Returns the number of days between the base date and the first day of this year.
    pub(super) const fn days_since_base_date(&self) -> usize {
        let year = self.as_usize();
        // number of leap years in 0..year, the year 0 is a leap year
        let leap_years = (year + 3) / 4 - (year + 99) / 100 + (year + 399) / 400;

        year * 365 + leap_years
    }

    pub(super) const fn from_days_since_base_date(days: usize) -> Self {
        // every year has at most 366 days, so this is a lower bound
        let mut year = Self::new(days / 366);

        while year.next().days_since_base_date() <= days {
            year = year.next();
        }

        year
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Iterates over all dates of the `month` in this year.
    pub fn iter_days_in(&self, month: Month) -> impl Iterator<Item = Date> + Clone {
        let year = *self;

        (1..=year.number_of_days_in_month(month))
            .filter_map(move |day| Date::new(year, month, day).ok())
    }
}

impl Add<usize> for Year {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.as_usize() + rhs)
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Year> for usize {
    fn from(value: Year) -> Self {
        value.as_usize()
    }
}
