//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, SetupState, TuiPresenter, run_tui};
