use thiserror::Error;

/// Errors surfaced by session setup and round start
///
/// Ordinary invalid moves (repeated letters, exhausted hints, empty undo
/// history) are not errors; the controller ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no words available to start a round")]
    EmptyPool,
    #[error("player count must be between {min} and {max}, got {count}")]
    PlayerCount {
        count: usize,
        min: usize,
        max: usize,
    },
}
