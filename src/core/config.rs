//! Game rules
//!
//! Scoring and limits for a session. Defaults match the classic party rules;
//! the CLI can override every field.

use std::time::Duration;

/// Rules applied by the round controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong guesses allowed before the round is lost
    pub max_wrong_guesses: u32,
    /// Hint budget per round (first hint is the clue, the rest reveal letters)
    pub max_hints: u32,
    /// Points per occurrence of a correctly guessed letter
    pub points_per_letter: u32,
    /// Bonus for completing the word
    pub points_per_win: u32,
    /// Score that wins the tournament
    pub grand_win_score: u32,
    /// Pause before the round result is shown
    pub round_end_delay: Duration,
}

impl GameConfig {
    pub const DEFAULT_MAX_WRONG_GUESSES: u32 = 9;
    pub const DEFAULT_MAX_HINTS: u32 = 3;
    pub const DEFAULT_POINTS_PER_LETTER: u32 = 10;
    pub const DEFAULT_POINTS_PER_WIN: u32 = 50;
    pub const DEFAULT_GRAND_WIN_SCORE: u32 = 500;
    pub const DEFAULT_ROUND_END_DELAY: Duration = Duration::from_millis(500);
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: Self::DEFAULT_MAX_WRONG_GUESSES,
            max_hints: Self::DEFAULT_MAX_HINTS,
            points_per_letter: Self::DEFAULT_POINTS_PER_LETTER,
            points_per_win: Self::DEFAULT_POINTS_PER_WIN,
            grand_win_score: Self::DEFAULT_GRAND_WIN_SCORE,
            round_end_delay: Self::DEFAULT_ROUND_END_DELAY,
        }
    }
}
