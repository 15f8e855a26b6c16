//! Schedules for typical and extreme amounts of working time.

use rand::rngs::StdRng;
use rand::SeedableRng;

use timeforge::schedule::{HolidayRegion, MonthScheduleBuilder, ScheduleError, ScheduleOptions};
use timeforge::time::{Month, Year};
use timeforge::working_duration;

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_few_hours_are_mostly_single_blocks() {
    let options = ScheduleOptions::default();
    let mut days = 0;
    let mut two_block_days = 0;

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let schedule = MonthScheduleBuilder::new(
            Year::new(2023),
            Month::March,
            working_duration!(10:00),
            "Tutorium",
            HolidayRegion::BadenWuerttemberg,
        )
        .build(&mut rng)
        .expect("10 hours should fit into march");

        common::assert_valid_schedule(&schedule, &options, &HolidayRegion::BadenWuerttemberg);
        // 10 hours in chunks of at least 2 hours
        assert!(schedule.len() <= 5, "{}", schedule);

        days += schedule.len();
        two_block_days += schedule.iter().filter(|entry| entry.has_pause()).count();
    }

    assert!(
        two_block_days * 2 < days,
        "{} of {} days have two blocks",
        two_block_days,
        days
    );
}

#[test]
fn test_full_month_pairs_every_day() {
    let options = ScheduleOptions::default();

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        // february 2023 has 20 working days and no holidays
        let schedule = MonthScheduleBuilder::new(
            Year::new(2023),
            Month::February,
            working_duration!(40:00),
            "Tutorium",
            HolidayRegion::BadenWuerttemberg,
        )
        .build(&mut rng)
        .expect("40 hours should fit into february");

        common::assert_valid_schedule(&schedule, &options, &HolidayRegion::BadenWuerttemberg);

        // only a single leftover chunk can be without a second block
        let single_block_days = schedule.iter().filter(|entry| !entry.has_pause()).count();
        assert!(single_block_days <= 1, "{}", schedule);
    }
}

#[test]
fn test_pairing_is_forced_when_days_run_out() {
    let mut options = ScheduleOptions::default();
    options.min_chunk = working_duration!(01:00);
    options.max_chunk = working_duration!(01:00);
    options.two_block_threshold = working_duration!(100:00);
    options.two_block_probability = 0.0;

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        // 30 chunks on 20 days
        let schedule = MonthScheduleBuilder::new(
            Year::new(2023),
            Month::February,
            working_duration!(30:00),
            "Tutorium",
            (),
        )
        .options(options.clone())
        .build(&mut rng)
        .expect("pairing should make the chunks fit");

        common::assert_valid_schedule(&schedule, &options, &());
        assert!(schedule.len() <= 20);
        assert!(schedule.iter().filter(|entry| entry.has_pause()).count() >= 10);
    }
}

#[test]
fn test_less_than_min_chunk() {
    let mut rng = StdRng::seed_from_u64(0);
    let schedule = MonthScheduleBuilder::new(
        Year::new(2023),
        Month::June,
        working_duration!(01:00),
        "Tutorium",
        HolidayRegion::BadenWuerttemberg,
    )
    .build(&mut rng)
    .expect("a single hour should fit");

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule.entries()[0].worked(), working_duration!(01:00));
    assert_eq!(schedule.entries()[0].pause(), working_duration!(00:00));
}

#[test]
fn test_too_many_hours() {
    let mut rng = StdRng::seed_from_u64(0);
    let result = MonthScheduleBuilder::new(
        Year::new(2023),
        Month::February,
        working_duration!(200:00),
        "Tutorium",
        HolidayRegion::BadenWuerttemberg,
    )
    .build(&mut rng);

    match result {
        Err(ScheduleError::Infeasible {
            available_days,
            max_chunk,
            ..
        }) => {
            assert_eq!(available_days, 20);
            assert_eq!(max_chunk, working_duration!(04:00));
        }
        other => panic!("expected an infeasible schedule, got {:?}", other),
    }
}

#[test]
fn test_nearly_full_month_always_fits() {
    let options = ScheduleOptions::default();

    // may 2023 has 20 available days, which hold up to 160 hours
    for total in [
        working_duration!(120:00),
        working_duration!(150:00),
        working_duration!(160:00),
    ] {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let schedule = MonthScheduleBuilder::new(
                Year::new(2023),
                Month::May,
                total,
                "Tutorium",
                HolidayRegion::BadenWuerttemberg,
            )
            .build(&mut rng)
            .unwrap_or_else(|e| panic!("{} with seed {}: {}", total, seed, e));

            common::assert_valid_schedule(&schedule, &options, &HolidayRegion::BadenWuerttemberg);
            assert!(schedule.len() <= 20);
        }
    }

    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        MonthScheduleBuilder::new(
            Year::new(2023),
            Month::May,
            working_duration!(160:01),
            "Tutorium",
            HolidayRegion::BadenWuerttemberg,
        )
        .build(&mut rng),
        Err(ScheduleError::Infeasible {
            available_days: 20,
            ..
        })
    ));
}

#[test]
fn test_no_working_days_left() {
    let mut rng = StdRng::seed_from_u64(0);
    let vacation = (1..=28)
        .map(|offset| timeforge::date!(2023:02:01) + (offset - 1))
        .collect::<Vec<_>>();

    assert!(matches!(
        MonthScheduleBuilder::new(
            Year::new(2023),
            Month::February,
            working_duration!(02:00),
            "Tutorium",
            vacation,
        )
        .build(&mut rng),
        Err(ScheduleError::Infeasible {
            available_days: 0,
            ..
        })
    ));
}
