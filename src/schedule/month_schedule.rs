use core::fmt;

use serde::Serialize;

use crate::schedule::DayEntry;
use crate::time::{Month, WorkingDuration, Year};

/// The generated work of one month, sorted by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSchedule {
    year: Year,
    month: Month,
    total: WorkingDuration,
    entries: Vec<DayEntry>,
}

impl MonthSchedule {
    pub(crate) fn new(
        year: Year,
        month: Month,
        total: WorkingDuration,
        mut entries: Vec<DayEntry>,
    ) -> Self {
        entries.sort();

        Self {
            year,
            month,
            total,
            entries,
        }
    }

    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// The working time that was requested for this month.
    #[must_use]
    pub const fn total(&self) -> WorkingDuration {
        self.total
    }

    /// The sum of the worked time of all entries.
    #[must_use]
    pub fn worked_time(&self) -> WorkingDuration {
        self.entries.iter().map(DayEntry::worked).sum()
    }

    #[must_use]
    pub fn entries(&self) -> &[DayEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayEntry> + '_ {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MonthSchedule {
    type Item = &'a DayEntry;
    type IntoIter = std::slice::Iter<'a, DayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for MonthSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:04}-{:02}: {} on {} days",
            self.year.as_usize(),
            self.month.as_usize(),
            self.total,
            self.entries.len()
        )?;

        for entry in &self.entries {
            writeln!(f, "  {}", entry)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::{date, time_stamp, working_duration};

    #[test]
    fn test_new_sorts_entries() {
        let entry = |date, worked| {
            DayEntry::new(
                "Übungsleitung",
                date,
                time_stamp!(10:00),
                worked,
                working_duration!(00:00),
            )
            .unwrap()
        };

        let schedule = MonthSchedule::new(
            Year::new(2023),
            Month::May,
            working_duration!(07:00),
            vec![
                entry(date!(2023:05:24), working_duration!(03:00)),
                entry(date!(2023:05:03), working_duration!(04:00)),
            ],
        );

        assert_eq!(
            schedule.iter().map(DayEntry::date).collect::<Vec<_>>(),
            vec![date!(2023:05:03), date!(2023:05:24)]
        );
        assert_eq!(schedule.worked_time(), schedule.total());
        assert_eq!(schedule.len(), 2);
    }
}
