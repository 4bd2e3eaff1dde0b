//! Terminal output formatting
//!
//! Console presenter for line mode plus the formatters both front ends share.

pub mod display;
pub mod formatters;

pub use display::{ConsolePresenter, print_category_report};
