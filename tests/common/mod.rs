use std::collections::HashSet;

use timeforge::input::toml_input::ConfigFile;
use timeforge::input::{Config, ConfigBuilder};
use timeforge::schedule::{HolidaySource, MonthSchedule, ScheduleOptions};
use timeforge::time::{Month, WorkingDuration, Year};

#[allow(dead_code)]
pub fn make_config_file(working_time: WorkingDuration) -> String {
    format!(
        concat!(
            //
            "[about]\n",
            "name = \"Smith, John\"\n",
            "staff_id = 1234567\n",
            "organisation = \"ITI\"\n",
            "\n",
            "[contract]\n",
            "working_time = \"{working_time}\"\n",
            "wage = 12.41\n",
            "job = \"Tutorium\"\n",
            "\n",
        ),
        working_time = working_time
    )
}

#[must_use]
#[allow(dead_code)]
pub fn make_config(working_time: WorkingDuration, year: usize, month: Month) -> Config {
    let file: ConfigFile =
        toml::from_str(&make_config_file(working_time)).expect("toml should be valid");

    let mut builder = ConfigBuilder::from_file(file);
    builder.year(Year::new(year)).month(month);

    builder.build().expect("config should be complete")
}

/// Checks everything a generated schedule has to guarantee.
#[allow(dead_code)]
pub fn assert_valid_schedule(
    schedule: &MonthSchedule,
    options: &ScheduleOptions,
    excluded: &impl HolidaySource,
) {
    assert_eq!(schedule.worked_time(), schedule.total(), "{}", schedule);

    let mut seen = HashSet::new();
    for entry in schedule {
        assert!(seen.insert(entry.date()), "{} is used twice", entry.date());
        assert_eq!(entry.date().year(), schedule.year());
        assert_eq!(entry.date().month(), schedule.month());
        assert!(!excluded.is_excluded(entry.date()), "{} is excluded", entry.date());
        assert!(options.is_working_day(entry.date()), "{} is not a working day", entry.date());

        assert_eq!(
            entry.time_span().duration(),
            entry.worked() + entry.pause(),
            "{}",
            entry
        );
        assert!(entry.start() >= options.min_start, "{}", entry);
        assert!(entry.end() <= options.latest_end, "{}", entry);
    }

    let dates = schedule.iter().map(|entry| entry.date()).collect::<Vec<_>>();
    assert!(dates.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", dates);
}

