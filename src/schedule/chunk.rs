use crate::time::WorkingDuration;

/// A block of work that has to be placed on exactly one day.
///
/// It is neither `Copy` nor `Clone`, placing it on a day consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct WorkChunk {
    duration: WorkingDuration,
}

impl WorkChunk {
    pub(crate) const fn new(duration: WorkingDuration) -> Self {
        Self { duration }
    }

    #[must_use]
    pub const fn duration(&self) -> WorkingDuration {
        self.duration
    }

    #[must_use]
    pub fn into_duration(self) -> WorkingDuration {
        self.duration
    }
}

/// The chunks of a month in the order they will be consumed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChunkQueue {
    // stored in reverse, so that popping the next chunk is cheap
    chunks: Vec<WorkChunk>,
}

impl ChunkQueue {
    pub(crate) fn from_drawn(mut chunks: Vec<WorkChunk>) -> Self {
        chunks.reverse();
        Self { chunks }
    }

    /// Removes the next chunk from the queue.
    pub fn pop(&mut self) -> Option<WorkChunk> {
        self.chunks.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The sum of all chunks that are left in the queue.
    #[must_use]
    pub fn total(&self) -> WorkingDuration {
        self.iter().map(WorkChunk::duration).sum()
    }

    /// Iterates over the remaining chunks in the order they would be popped.
    pub fn iter(&self) -> impl Iterator<Item = &WorkChunk> + '_ {
        self.chunks.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::working_duration;

    #[test]
    fn test_pop_in_drawn_order() {
        let mut queue = ChunkQueue::from_drawn(vec![
            WorkChunk::new(working_duration!(04:00)),
            WorkChunk::new(working_duration!(02:00)),
            WorkChunk::new(working_duration!(01:00)),
        ]);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.total(), working_duration!(07:00));
        assert_eq!(
            queue.iter().map(WorkChunk::duration).collect::<Vec<_>>(),
            vec![
                working_duration!(04:00),
                working_duration!(02:00),
                working_duration!(01:00)
            ]
        );

        assert_eq!(queue.pop().map(WorkChunk::into_duration), Some(working_duration!(04:00)));
        assert_eq!(queue.pop().map(WorkChunk::into_duration), Some(working_duration!(02:00)));
        assert_eq!(queue.total(), working_duration!(01:00));
        assert_eq!(queue.pop().map(WorkChunk::into_duration), Some(working_duration!(01:00)));

        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }
}
