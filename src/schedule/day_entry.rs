use core::fmt;

use serde::Serialize;

use crate::schedule::ScheduleError;
use crate::time::{Date, TimeSpan, TimeStamp, WorkingDuration};

/// The work done on a single day.
///
/// Entries are ordered by their date first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DayEntry {
    date: Date,
    job: String,
    #[serde(flatten)]
    time_span: TimeSpan,
    pause: WorkingDuration,
    worked: WorkingDuration,
}

impl DayEntry {
    /// Creates an entry that starts at `start` and ends after `worked` and `pause` have passed.
    pub fn new(
        job: impl Into<String>,
        date: Date,
        start: TimeStamp,
        worked: WorkingDuration,
        pause: WorkingDuration,
    ) -> Result<Self, ScheduleError> {
        let end = start
            .checked_add(worked + pause)
            .ok_or(ScheduleError::ExceedsDay {
                date,
                start,
                duration: worked + pause,
            })?;

        Ok(Self {
            date,
            job: job.into(),
            time_span: TimeSpan::new(start, end),
            pause,
            worked,
        })
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub fn job(&self) -> &str {
        &self.job
    }

    #[must_use]
    pub const fn time_span(&self) -> TimeSpan {
        self.time_span
    }

    #[must_use]
    pub const fn start(&self) -> TimeStamp {
        self.time_span.start()
    }

    #[must_use]
    pub const fn end(&self) -> TimeStamp {
        self.time_span.end()
    }

    #[must_use]
    pub const fn pause(&self) -> WorkingDuration {
        self.pause
    }

    #[must_use]
    pub const fn worked(&self) -> WorkingDuration {
        self.worked
    }

    #[must_use]
    pub fn has_pause(&self) -> bool {
        !self.pause.is_zero()
    }
}

impl fmt::Display for DayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} pause {} worked {}: {}",
            self.date,
            self.date.week_day(),
            self.time_span,
            self.pause,
            self.worked,
            self.job
        )
    }
}
