use derive_more::Display;
use serde::Serialize;

use crate::time::{TimeStamp, WorkingDuration};
use crate::{max, min};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display("{} - {}", start, end)]
pub struct TimeSpan {
    start: TimeStamp,
    end: TimeStamp,
}

impl TimeSpan {
    /// # Panics
    ///
    /// If `end` is before `start`.
    #[must_use]
    pub fn new(start: TimeStamp, end: TimeStamp) -> Self {
        assert!(start <= end, "time span must not end before it starts");

        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> TimeStamp {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> TimeStamp {
        self.end
    }

    #[must_use]
    pub fn duration(&self) -> WorkingDuration {
        self.start.elapsed(&self.end)
    }

    pub fn overlapping_duration(&self, other: &TimeSpan) -> Option<WorkingDuration> {
        // 06:00 to 23:00
        // 03:00 to 07:00
        // -> 01:00

        if self.end <= other.start || self.start >= other.end {
            return None;
        }

        let overlap_window_start = max!(self.start, other.start);
        let overlap_window_end = min!(self.end, other.end);

        Some(overlap_window_start.elapsed(&overlap_window_end))
    }
}
