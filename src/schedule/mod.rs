//! Generates the synthetic work schedule of a month.
//!
//! The [`TimeBlockPartitioner`] splits the working time into chunks, which the
//! [`MonthScheduleBuilder`] then places on random, unique working days.

mod builder;
mod chunk;
mod date_pool;
mod day_entry;
mod error;
mod excluded;
mod month_schedule;
mod options;
mod partitioner;

pub use builder::*;
pub use chunk::*;
pub(crate) use date_pool::DatePool;
pub use day_entry::*;
pub use error::*;
pub use excluded::*;
pub use month_schedule::*;
pub use options::*;
pub use partitioner::*;
