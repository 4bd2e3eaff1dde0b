//! Command implementations

pub mod categories;
pub mod simple;

pub use categories::{CategoryReport, summarize};
pub use simple::{Input, parse_input, run_simple};
