//! The layout of the TOML config file.

mod about;
mod config_file;
mod contract;
mod holidays;

pub use about::*;
pub use config_file::*;
pub use contract::*;
pub use holidays::*;
