use thiserror::Error;

use crate::schedule::{HolidaySource, MonthSchedule, ScheduleOptions};
use crate::time::{Date, WeekDay};
use crate::verifier::Verifier;

/// Verifies that every entry is on its own working day of the month.
pub struct VerifyDates<'a, H: ?Sized> {
    options: &'a ScheduleOptions,
    excluded: &'a H,
}

impl<'a, H: HolidaySource + ?Sized> VerifyDates<'a, H> {
    pub fn new(options: &'a ScheduleOptions, excluded: &'a H) -> Self {
        Self { options, excluded }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidEntryDate {
    #[error("{date} is not in {year:04}-{month:02}")]
    OutsideMonth {
        date: Date,
        year: usize,
        month: usize,
    },
    #[error("{date}: you are not supposed to work on holidays or excluded days")]
    Excluded { date: Date },
    #[error("{date}: you are not supposed to work on {week_day}s")]
    NonWorkingDay { date: Date, week_day: WeekDay },
    #[error("{date} has more than one entry")]
    Duplicate { date: Date },
    #[error("{date} comes after {previous}, entries must be sorted by date")]
    Unsorted { previous: Date, date: Date },
}

impl<'a, H: HolidaySource + ?Sized> Verifier for VerifyDates<'a, H> {
    type Error = InvalidEntryDate;
    type Errors = Vec<Self::Error>;

    fn verify(&self, schedule: &MonthSchedule) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();
        let mut previous: Option<Date> = None;

        for date in schedule.iter().map(|entry| entry.date()) {
            if date.year() != schedule.year() || date.month() != schedule.month() {
                errors.push(InvalidEntryDate::OutsideMonth {
                    date,
                    year: schedule.year().as_usize(),
                    month: schedule.month().as_usize(),
                });
            }

            if self.excluded.is_excluded(date) {
                errors.push(InvalidEntryDate::Excluded { date });
            }

            if !self.options.is_working_day(date) {
                errors.push(InvalidEntryDate::NonWorkingDay {
                    date,
                    week_day: date.week_day(),
                });
            }

            match previous {
                Some(previous) if previous == date => {
                    errors.push(InvalidEntryDate::Duplicate { date });
                }
                Some(previous) if previous > date => {
                    errors.push(InvalidEntryDate::Unsorted { previous, date });
                }
                _ => {}
            }

            previous = Some(date);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
