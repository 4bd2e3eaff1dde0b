//! Game rules and state
//!
//! [`Session`] holds players, the current round and undo history.
//! [`Controller`] applies player actions to it and reports changes through a
//! [`Presenter`].

mod controller;
mod error;
mod presenter;
mod session;

pub use controller::{Controller, GuessOutcome, HintOutcome};
pub use error::GameError;
pub use presenter::{HintView, NullPresenter, Presenter, RoundEnding};
pub use session::{History, MAX_PLAYERS, MIN_PLAYERS, Round, Session, Snapshot};
