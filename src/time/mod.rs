//! Calendar and clock primitives used by the schedule generator.

pub mod holiday;

mod date;
pub use date::*;
mod month;
pub use month::*;
mod week_day;
pub use week_day::*;
mod year;
pub use year::*;
mod time_stamp;
pub use time_stamp::*;
mod time_span;
pub use time_span::*;
mod working_duration;
pub use working_duration::*;
