use log::trace;
use rand::Rng;

use crate::schedule::{ChunkQueue, ScheduleError, ScheduleOptions, WorkChunk};
use crate::time::WorkingDuration;
use crate::utils;
use crate::working_duration;

/// Splits the working time of a month into random blocks of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBlockPartitioner {
    min_chunk: WorkingDuration,
    max_chunk: WorkingDuration,
    granularity: WorkingDuration,
}

impl TimeBlockPartitioner {
    /// Creates a partitioner that draws whole hours between `min_chunk` and `max_chunk`.
    pub fn new(
        min_chunk: WorkingDuration,
        max_chunk: WorkingDuration,
    ) -> Result<Self, ScheduleError> {
        Self::with_granularity(min_chunk, max_chunk, working_duration!(01:00))
    }

    pub fn with_granularity(
        min_chunk: WorkingDuration,
        max_chunk: WorkingDuration,
        granularity: WorkingDuration,
    ) -> Result<Self, ScheduleError> {
        if min_chunk.is_zero() {
            return Err(ScheduleError::ZeroDuration { name: "min_chunk" });
        }

        if granularity.is_zero() {
            return Err(ScheduleError::ZeroDuration {
                name: "granularity",
            });
        }

        if min_chunk > max_chunk {
            return Err(ScheduleError::InvalidRange {
                name: "chunk",
                min: min_chunk,
                max: max_chunk,
            });
        }

        Ok(Self {
            min_chunk,
            max_chunk,
            granularity,
        })
    }

    pub fn from_options(options: &ScheduleOptions) -> Result<Self, ScheduleError> {
        Self::with_granularity(options.min_chunk, options.max_chunk, options.granularity)
    }

    #[must_use]
    pub const fn min_chunk(&self) -> WorkingDuration {
        self.min_chunk
    }

    #[must_use]
    pub const fn max_chunk(&self) -> WorkingDuration {
        self.max_chunk
    }

    /// Draws chunks until they add up to `total`.
    ///
    /// Every chunk is between `min_chunk` and `max_chunk`, except for the last
    /// one, which is cut down to whatever is left.
    pub fn partition<R: Rng + ?Sized>(
        &self,
        total: WorkingDuration,
        rng: &mut R,
    ) -> Result<ChunkQueue, ScheduleError> {
        if total.is_zero() {
            return Err(ScheduleError::ZeroWorkingTime);
        }

        Ok(self.draw_chunks(total, None, rng))
    }

    /// Like [`partition`](Self::partition), but never returns more than `slots` chunks.
    ///
    /// A chunk is drawn larger than `min_chunk` whenever the time that is left
    /// would otherwise not fit into the remaining slots.
    pub fn partition_into<R: Rng + ?Sized>(
        &self,
        total: WorkingDuration,
        slots: usize,
        rng: &mut R,
    ) -> Result<ChunkQueue, ScheduleError> {
        if total.is_zero() {
            return Err(ScheduleError::ZeroWorkingTime);
        }

        if !self.fits(total, slots) {
            return Err(ScheduleError::ExceedsCapacity {
                total,
                slots,
                max_chunk: self.max_chunk,
            });
        }

        Ok(self.draw_chunks(total, Some(slots), rng))
    }

    /// Returns whether `total` can be split into at most `slots` chunks.
    #[must_use]
    pub fn fits(&self, total: WorkingDuration, slots: usize) -> bool {
        u64::from(total.as_mins()) <= self.capacity(slots)
    }

    fn capacity(&self, slots: usize) -> u64 {
        u64::from(self.max_chunk.as_mins()).saturating_mul(slots as u64)
    }

    /// The smallest grid point that still lets `remaining` fit into `slots` chunks.
    fn lower_bound(&self, remaining: WorkingDuration, slots: usize) -> u32 {
        let min = self.min_chunk.as_mins();
        let max = self.max_chunk.as_mins();
        let step = self.granularity.as_mins();

        let rest = self.capacity(slots.saturating_sub(1));
        let needed = u64::from(remaining.as_mins()).saturating_sub(rest);
        // needed is at most remaining
        let needed = u32::try_from(needed).unwrap_or(u32::MAX);
        if needed <= min {
            return min;
        }

        // the grid starts at min_chunk, max_chunk itself is always allowed
        let snapped = (needed - min)
            .div_ceil(step)
            .saturating_mul(step)
            .saturating_add(min);
        snapped.min(max)
    }

    fn draw_chunks<R: Rng + ?Sized>(
        &self,
        total: WorkingDuration,
        mut slots: Option<usize>,
        rng: &mut R,
    ) -> ChunkQueue {
        let mut chunks = Vec::new();
        let mut remaining = total;

        while !remaining.is_zero() {
            let min = match slots {
                Some(slots) => self.lower_bound(remaining, slots),
                None => self.min_chunk.as_mins(),
            };

            let drawn = WorkingDuration::from_mins(utils::uniform_step(
                rng,
                min,
                self.max_chunk.as_mins(),
                self.granularity.as_mins(),
            ));

            let chunk = drawn.min(remaining);
            remaining -= chunk;
            chunks.push(WorkChunk::new(chunk));

            if let Some(slots) = slots.as_mut() {
                *slots = slots.saturating_sub(1);
            }
        }

        trace!(
            "partitioned {} into {} chunks: {:?}",
            total,
            chunks.len(),
            chunks.iter().map(|c| c.duration().to_string()).collect::<Vec<_>>()
        );

        ChunkQueue::from_drawn(chunks)
    }
}
