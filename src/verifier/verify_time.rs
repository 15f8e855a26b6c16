use thiserror::Error;

use crate::schedule::MonthSchedule;
use crate::time::{Date, TimeSpan, TimeStamp, WorkingDuration};
use crate::time_stamp;
use crate::verifier::Verifier;

/// Verifies the times of each entry and that nobody works late at night.
pub struct VerifyTime {
    latest_end: TimeStamp,
}

impl VerifyTime {
    #[must_use]
    pub fn new(latest_end: TimeStamp) -> Self {
        Self { latest_end }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidEntryTime {
    #[error("{day}: {time_span} does not match {worked} of work and a pause of {pause}")]
    Inconsistent {
        day: Date,
        time_span: TimeSpan,
        worked: WorkingDuration,
        pause: WorkingDuration,
    },
    #[error("It is forbidden to work at night: Worked on {day} for {duration} at {time_span} into {night_time}")]
    NightWork {
        duration: WorkingDuration,
        day: Date,
        time_span: TimeSpan,
        night_time: TimeSpan,
    },
}

impl Verifier for VerifyTime {
    type Error = InvalidEntryTime;
    type Errors = Vec<Self::Error>;

    fn verify(&self, schedule: &MonthSchedule) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();
        let night_time = TimeSpan::new(self.latest_end, time_stamp!(23:59));

        for entry in schedule {
            if entry.time_span().duration() != entry.worked() + entry.pause() {
                errors.push(InvalidEntryTime::Inconsistent {
                    day: entry.date(),
                    time_span: entry.time_span(),
                    worked: entry.worked(),
                    pause: entry.pause(),
                });
            }

            if let Some(duration) = entry.time_span().overlapping_duration(&night_time) {
                errors.push(InvalidEntryTime::NightWork {
                    duration,
                    day: entry.date(),
                    time_span: entry.time_span(),
                    night_time,
                });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::schedule::DayEntry;
    use crate::time::{Month, Year};
    use crate::{date, working_duration};

    fn schedule_with(start: TimeStamp, worked: WorkingDuration) -> MonthSchedule {
        let entry = DayEntry::new(
            "Tutorium",
            date!(2023:05:02),
            start,
            worked,
            working_duration!(02:00),
        )
        .unwrap();

        MonthSchedule::new(Year::new(2023), Month::May, worked, vec![entry])
    }

    #[test]
    fn test_valid_time() {
        assert_eq!(
            VerifyTime::new(time_stamp!(23:00))
                .verify(&schedule_with(time_stamp!(12:00), working_duration!(09:00))),
            Ok(())
        );
    }

    #[test]
    fn test_night_work() {
        assert_eq!(
            VerifyTime::new(time_stamp!(22:00))
                .verify(&schedule_with(time_stamp!(14:00), working_duration!(07:30))),
            Err(vec![InvalidEntryTime::NightWork {
                duration: working_duration!(01:30),
                day: date!(2023:05:02),
                time_span: TimeSpan::new(time_stamp!(14:00), time_stamp!(23:30)),
                night_time: TimeSpan::new(time_stamp!(22:00), time_stamp!(23:59)),
            }])
        );
    }
}
