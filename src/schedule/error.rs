use thiserror::Error;

use crate::time::{Date, Month, TimeStamp, WorkingDuration, Year};

/// Everything that can go wrong while generating a [`MonthSchedule`](crate::schedule::MonthSchedule).
///
/// The builder reports all of them before any random value is drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("the working time of a month must be positive")]
    ZeroWorkingTime,
    #[error("{name} must be positive")]
    ZeroDuration { name: &'static str },
    #[error("invalid {name} range: minimum {min} is larger than maximum {max}")]
    InvalidRange {
        name: &'static str,
        min: WorkingDuration,
        max: WorkingDuration,
    },
    #[error("the probability for two blocks on a day must be between 0 and 1, got {0}")]
    InvalidProbability(f64),
    #[error("a day with {needed} of work and pause does not fit before {latest_end}")]
    DayTooLong {
        needed: WorkingDuration,
        latest_end: TimeStamp,
    },
    #[error(
        "the start window {earliest} - {latest} does not leave room for the longest day before {latest_end}"
    )]
    InvalidStartWindow {
        earliest: TimeStamp,
        latest: TimeStamp,
        latest_end: TimeStamp,
    },
    #[error("work of {duration} starting at {start} on {date} would end on the next day")]
    ExceedsDay {
        date: Date,
        start: TimeStamp,
        duration: WorkingDuration,
    },
    #[error("{total} of work does not fit into {slots} blocks of at most {max_chunk}")]
    ExceedsCapacity {
        total: WorkingDuration,
        slots: usize,
        max_chunk: WorkingDuration,
    },
    #[error(
        "{total} of work does not fit into the {available_days} available days of \
         {year:04}-{month:02}, even with two blocks of {max_chunk} on every day"
    )]
    Infeasible {
        year: Year,
        month: Month,
        total: WorkingDuration,
        max_chunk: WorkingDuration,
        available_days: usize,
    },
}
