use serde::Deserialize;

use crate::schedule::ScheduleError;
use crate::time::{Date, TimeStamp, WeekDay, WorkingDuration};
use crate::{time_stamp, working_duration};

/// Options that shape how a month schedule looks.
///
/// The defaults produce days of two to four hours of work, optionally
/// followed by a pause of two to three hours and a second block, starting
/// between 08:00 and 12:00 and never ending after 23:00.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct ScheduleOptions {
    /// The smallest block of work that is drawn.
    pub min_chunk: WorkingDuration,
    /// The largest block of work that is drawn.
    pub max_chunk: WorkingDuration,
    pub min_pause: WorkingDuration,
    pub max_pause: WorkingDuration,
    /// All drawn durations and start times are multiples of this step,
    /// counted from the lower bound of their range.
    pub granularity: WorkingDuration,
    /// The earliest time a day can start.
    pub min_start: TimeStamp,
    /// The latest time a day can start.
    ///
    /// If this is not set, it is derived from `latest_end`, so that the
    /// longest possible day still ends in time.
    pub max_start: Option<TimeStamp>,
    /// No work happens after this time.
    pub latest_end: TimeStamp,
    /// Below this monthly total, days only have two blocks with
    /// `two_block_probability`. At or above it, every day gets two blocks
    /// if there are chunks left.
    pub two_block_threshold: WorkingDuration,
    pub two_block_probability: f64,
    /// Weekdays on which no work is scheduled.
    pub non_working_days: Vec<WeekDay>,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            min_chunk: working_duration!(02:00),
            max_chunk: working_duration!(04:00),
            min_pause: working_duration!(02:00),
            max_pause: working_duration!(03:00),
            granularity: working_duration!(01:00),
            min_start: time_stamp!(08:00),
            max_start: None,
            latest_end: time_stamp!(23:00),
            two_block_threshold: working_duration!(20:00),
            two_block_probability: 0.3,
            non_working_days: vec![WeekDay::Saturday, WeekDay::Sunday],
        }
    }
}

impl ScheduleOptions {
    /// Checks that the options describe at least one possible day.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.min_chunk.is_zero() {
            return Err(ScheduleError::ZeroDuration { name: "min_chunk" });
        }

        if self.granularity.is_zero() {
            return Err(ScheduleError::ZeroDuration {
                name: "granularity",
            });
        }

        if self.min_chunk > self.max_chunk {
            return Err(ScheduleError::InvalidRange {
                name: "chunk",
                min: self.min_chunk,
                max: self.max_chunk,
            });
        }

        if self.min_pause > self.max_pause {
            return Err(ScheduleError::InvalidRange {
                name: "pause",
                min: self.min_pause,
                max: self.max_pause,
            });
        }

        if !(0.0..=1.0).contains(&self.two_block_probability) {
            return Err(ScheduleError::InvalidProbability(
                self.two_block_probability,
            ));
        }

        self.latest_start().map(|_| ())
    }

    /// The longest a day can take from start to end.
    #[must_use]
    pub fn longest_day(&self) -> WorkingDuration {
        self.max_chunk * 2 + self.max_pause
    }

    /// Returns the latest time a day may start, so that even the longest day
    /// ends before `latest_end`.
    pub fn latest_start(&self) -> Result<TimeStamp, ScheduleError> {
        let needed = self.longest_day();
        let bound = self
            .latest_end
            .as_minutes()
            .checked_sub(needed.as_mins())
            .map(TimeStamp::from_minutes)
            .ok_or(ScheduleError::DayTooLong {
                needed,
                latest_end: self.latest_end,
            })?;

        let latest = self.max_start.unwrap_or(bound);
        if latest < self.min_start || latest > bound {
            return Err(ScheduleError::InvalidStartWindow {
                earliest: self.min_start,
                latest,
                latest_end: self.latest_end,
            });
        }

        Ok(latest)
    }

    /// The probability that a day gets a second block for a month with
    /// `total` working time.
    #[must_use]
    pub fn two_block_probability_for(&self, total: WorkingDuration) -> f64 {
        if total < self.two_block_threshold {
            self.two_block_probability
        } else {
            1.0
        }
    }

    #[must_use]
    pub fn is_working_day(&self, date: Date) -> bool {
        !self.non_working_days.contains(&date.week_day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_default_is_valid() {
        let options = ScheduleOptions::default();

        assert_eq!(options.validate(), Ok(()));
        assert_eq!(options.longest_day(), working_duration!(11:00));
        assert_eq!(options.latest_start(), Ok(time_stamp!(12:00)));
    }

    #[test]
    fn test_explicit_max_start() {
        let mut options = ScheduleOptions::default();
        options.max_start = Some(time_stamp!(10:30));
        assert_eq!(options.latest_start(), Ok(time_stamp!(10:30)));

        options.max_start = Some(time_stamp!(12:01));
        assert_eq!(
            options.latest_start(),
            Err(ScheduleError::InvalidStartWindow {
                earliest: time_stamp!(08:00),
                latest: time_stamp!(12:01),
                latest_end: time_stamp!(23:00),
            })
        );

        options.max_start = Some(time_stamp!(07:00));
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_day_too_long() {
        let mut options = ScheduleOptions::default();
        options.max_chunk = working_duration!(12:00);

        assert_eq!(
            options.validate(),
            Err(ScheduleError::DayTooLong {
                needed: working_duration!(27:00),
                latest_end: time_stamp!(23:00),
            })
        );

        // 08:00 + 2 * 06:00 + 03:00 ends exactly at 23:00
        options.max_chunk = working_duration!(06:00);
        assert_eq!(options.latest_start(), Ok(time_stamp!(08:00)));

        options.max_chunk = working_duration!(07:00);
        assert_eq!(
            options.validate(),
            Err(ScheduleError::InvalidStartWindow {
                earliest: time_stamp!(08:00),
                latest: time_stamp!(06:00),
                latest_end: time_stamp!(23:00),
            })
        );
    }

    #[test]
    fn test_invalid_ranges() {
        let mut options = ScheduleOptions::default();
        options.min_chunk = working_duration!(05:00);
        assert_eq!(
            options.validate(),
            Err(ScheduleError::InvalidRange {
                name: "chunk",
                min: working_duration!(05:00),
                max: working_duration!(04:00),
            })
        );

        let mut options = ScheduleOptions::default();
        options.min_pause = working_duration!(04:00);
        assert!(matches!(
            options.validate(),
            Err(ScheduleError::InvalidRange { name: "pause", .. })
        ));

        let mut options = ScheduleOptions::default();
        options.granularity = working_duration!(00:00);
        assert_eq!(
            options.validate(),
            Err(ScheduleError::ZeroDuration {
                name: "granularity"
            })
        );

        let mut options = ScheduleOptions::default();
        options.two_block_probability = 1.5;
        assert_eq!(
            options.validate(),
            Err(ScheduleError::InvalidProbability(1.5))
        );

        options.two_block_probability = f64::NAN;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_two_block_probability_for() {
        let options = ScheduleOptions::default();

        assert_eq!(options.two_block_probability_for(working_duration!(10:00)), 0.3);
        assert_eq!(options.two_block_probability_for(working_duration!(20:00)), 1.0);
        assert_eq!(options.two_block_probability_for(working_duration!(40:00)), 1.0);
    }

    #[test]
    fn test_is_working_day() {
        let options = ScheduleOptions::default();

        // 2023-04-15 is a Saturday
        assert!(!options.is_working_day(date!(2023:04:15)));
        assert!(!options.is_working_day(date!(2023:04:16)));
        assert!(options.is_working_day(date!(2023:04:17)));
    }

    #[test]
    fn test_deserialize() {
        let options: ScheduleOptions = toml::from_str(
            r#"
            min_chunk = "01:00"
            max_chunk = 3
            two_block_probability = 0.5
            non_working_days = ["sunday"]
            "#,
        )
        .unwrap();

        let mut expected = ScheduleOptions::default();
        expected.min_chunk = working_duration!(01:00);
        expected.max_chunk = working_duration!(03:00);
        expected.two_block_probability = 0.5;
        expected.non_working_days = vec![WeekDay::Sunday];

        assert_eq!(options, expected);
        assert!(toml::from_str::<ScheduleOptions>("unknown = 1").is_err());
    }
}
