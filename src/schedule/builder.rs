use log::{debug, trace};
use rand::Rng;

use crate::schedule::{
    DatePool, DayEntry, HolidaySource, MonthSchedule, ScheduleError, ScheduleOptions,
    TimeBlockPartitioner,
};
use crate::time::{Month, TimeStamp, WorkingDuration, Year};
use crate::utils;

/// Distributes the working time of a month over random days.
///
/// ```
/// # use timeforge::schedule::{HolidayRegion, MonthScheduleBuilder};
/// # use timeforge::time::{Month, Year};
/// # use timeforge::working_duration;
/// # use rand::SeedableRng;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let schedule = MonthScheduleBuilder::new(
///     Year::new(2023),
///     Month::May,
///     working_duration!(40:00),
///     "Tutorium",
///     HolidayRegion::BadenWuerttemberg,
/// )
/// .build(&mut rng)?;
///
/// assert_eq!(schedule.worked_time(), working_duration!(40:00));
/// # Ok::<(), timeforge::schedule::ScheduleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MonthScheduleBuilder<H> {
    year: Year,
    month: Month,
    total: WorkingDuration,
    job: String,
    excluded: H,
    options: ScheduleOptions,
}

impl<H: HolidaySource> MonthScheduleBuilder<H> {
    pub fn new(
        year: Year,
        month: Month,
        total: WorkingDuration,
        job: impl Into<String>,
        excluded: H,
    ) -> Self {
        Self {
            year,
            month,
            total,
            job: job.into(),
            excluded,
            options: ScheduleOptions::default(),
        }
    }

    #[must_use]
    pub fn options(mut self, options: ScheduleOptions) -> Self {
        self.options = options;
        self
    }

    fn infeasible(&self, available_days: usize) -> ScheduleError {
        ScheduleError::Infeasible {
            year: self.year,
            month: self.month,
            total: self.total,
            max_chunk: self.options.max_chunk,
            available_days,
        }
    }

    /// Generates a schedule whose entries add up to the requested working time.
    ///
    /// All configuration errors are reported before anything is drawn from `rng`.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MonthSchedule, ScheduleError> {
        if self.total.is_zero() {
            return Err(ScheduleError::ZeroWorkingTime);
        }

        let options = &self.options;
        options.validate()?;
        let latest_start = options.latest_start()?;

        let partitioner = TimeBlockPartitioner::from_options(options)?;
        let mut pool = DatePool::new(self.year, self.month, options, &self.excluded);

        // at most two chunks on every available day
        let slots = 2 * pool.len();
        if !partitioner.fits(self.total, slots) {
            return Err(self.infeasible(pool.len()));
        }

        let mut chunks = partitioner.partition_into(self.total, slots, rng)?;

        let two_block_probability = options.two_block_probability_for(self.total);
        debug!(
            "scheduling {} in {} chunks on {} available days of {:04}-{:02} (two blocks: {})",
            self.total,
            chunks.len(),
            pool.len(),
            self.year.as_usize(),
            self.month.as_usize(),
            two_block_probability
        );

        let mut entries = Vec::with_capacity(pool.len());
        while let Some(primary) = chunks.pop() {
            let available = pool.len();
            let date = pool
                .draw(rng)
                .ok_or_else(|| self.infeasible(available))?;

            // the chunks that are left must still fit on the remaining days
            let is_forced = chunks.len() > 2 * pool.len();
            let has_two_blocks =
                !chunks.is_empty() && (is_forced || rng.gen_bool(two_block_probability));

            let mut worked = primary.into_duration();
            let mut pause = WorkingDuration::default();
            if has_two_blocks {
                if let Some(secondary) = chunks.pop() {
                    worked += secondary.into_duration();
                    pause = WorkingDuration::from_mins(utils::uniform_step(
                        rng,
                        options.min_pause.as_mins(),
                        options.max_pause.as_mins(),
                        options.granularity.as_mins(),
                    ));
                }
            }

            let start = TimeStamp::from_minutes(utils::uniform_step(
                rng,
                options.min_start.as_minutes(),
                latest_start.as_minutes(),
                options.granularity.as_mins(),
            ));

            let entry = DayEntry::new(self.job.as_str(), date, start, worked, pause)?;
            trace!("scheduled {} (forced pairing: {})", entry, is_forced);
            entries.push(entry);
        }

        Ok(MonthSchedule::new(
            self.year,
            self.month,
            self.total,
            entries,
        ))
    }
}
