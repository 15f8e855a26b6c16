use log::debug;
use rand::Rng;

use crate::schedule::{HolidaySource, ScheduleOptions};
use crate::time::{Date, Month, Year};

/// The number of rejected draws per day of the month, after which a date is
/// picked directly from the remaining ones.
const REJECTIONS_PER_DAY: usize = 64;

/// The dates of a month that can still receive work.
#[derive(Debug, Clone)]
pub(crate) struct DatePool {
    first_day: Date,
    days_in_month: usize,
    available: Vec<Date>,
    rejections: usize,
}

impl DatePool {
    pub fn new<H: HolidaySource + ?Sized>(
        year: Year,
        month: Month,
        options: &ScheduleOptions,
        excluded: &H,
    ) -> Self {
        let available = year
            .iter_days_in(month)
            .filter(|date| options.is_working_day(*date) && !excluded.is_excluded(*date))
            .collect::<Vec<_>>();

        Self {
            first_day: Date::first_day(year, month),
            days_in_month: year.number_of_days_in_month(month),
            available,
            rejections: 0,
        }
    }

    /// The number of dates that can still be drawn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Draws a random day of the month until it hits a date that is still
    /// available and removes it from the pool.
    ///
    /// Returns `None` if the pool is empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Date> {
        if self.available.is_empty() {
            return None;
        }

        while self.rejections < self.days_in_month * REJECTIONS_PER_DAY {
            let candidate = self.first_day + rng.gen_range(0..self.days_in_month);

            if let Some(index) = self.available.iter().position(|date| *date == candidate) {
                return Some(self.available.swap_remove(index));
            }

            self.rejections += 1;
        }

        debug!(
            "rejected {} random days, picking from the {} remaining dates",
            self.rejections,
            self.available.len()
        );
        let index = rng.gen_range(0..self.available.len());
        Some(self.available.swap_remove(index))
    }
}
