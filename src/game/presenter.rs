//! Presentation callbacks
//!
//! The controller never draws anything. After each state change it hands plain
//! state to a [`Presenter`], which may print it, store it for the next frame, or
//! ignore it. Every method has a no-op default.

use crate::core::{LetterSet, Player, SecretWord};

/// How a round finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEnding {
    /// The word was completed by `winner`
    Won {
        winner: usize,
        name: String,
        word: String,
        translation: String,
    },
    /// The gallows filled up
    Lost { word: String, translation: String },
    /// `winner` reached the grand-win score; all scores were reset afterwards
    Champion {
        winner: usize,
        name: String,
        /// Score at the moment of winning, before the reset
        score: u32,
        trophies: u32,
        word: String,
        translation: String,
    },
}

impl RoundEnding {
    /// The revealed secret word
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::Won { word, .. } | Self::Lost { word, .. } | Self::Champion { word, .. } => word,
        }
    }

    #[must_use]
    pub fn translation(&self) -> &str {
        match self {
            Self::Won { translation, .. }
            | Self::Lost { translation, .. }
            | Self::Champion { translation, .. } => translation,
        }
    }

    /// Seat index of the winning player, if any
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        match self {
            Self::Won { winner, .. } | Self::Champion { winner, .. } => Some(*winner),
            Self::Lost { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_champion(&self) -> bool {
        matches!(self, Self::Champion { .. })
    }
}

/// Hint panel state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintView<'a> {
    /// The textual clue, once the first hint has been used
    pub clue: Option<&'a str>,
    pub hints_used: u32,
    pub max_hints: u32,
}

impl HintView<'_> {
    #[must_use]
    pub const fn hints_left(&self) -> u32 {
        self.max_hints.saturating_sub(self.hints_used)
    }

    /// Hints used beyond the clue, each of which revealed a letter
    #[must_use]
    pub const fn letters_revealed(&self) -> u32 {
        self.hints_used.saturating_sub(1)
    }
}

/// Receiver for the controller's render callbacks
pub trait Presenter {
    /// Players and whose turn it is
    fn scoreboard(&mut self, _players: &[Player], _active: usize) {}

    /// The word blanks
    fn word(&mut self, _secret: &SecretWord, _guessed: LetterSet) {}

    /// Key states for the letter keyboard
    fn keyboard(&mut self, _secret: &SecretWord, _guessed: LetterSet) {}

    /// Wrong guesses so far out of the allowed maximum
    fn gallows(&mut self, _wrong_guesses: u32, _max_wrong_guesses: u32) {}

    fn hint(&mut self, _hint: &HintView<'_>) {}

    /// The round is over; called once per round
    fn round_over(&mut self, _ending: &RoundEnding) {}

    /// A message the user must see
    fn alert(&mut self, _message: &str) {}
}

/// Presenter that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_view_counts() {
        let view = HintView {
            clue: Some("Mia"),
            hints_used: 3,
            max_hints: 3,
        };
        assert_eq!(view.hints_left(), 0);
        assert_eq!(view.letters_revealed(), 2);

        let fresh = HintView {
            clue: None,
            hints_used: 0,
            max_hints: 3,
        };
        assert_eq!(fresh.hints_left(), 3);
        assert_eq!(fresh.letters_revealed(), 0);
    }

    #[test]
    fn ending_accessors() {
        let lost = RoundEnding::Lost {
            word: "GATO".into(),
            translation: "Cat".into(),
        };
        assert_eq!(lost.word(), "GATO");
        assert_eq!(lost.translation(), "Cat");
        assert_eq!(lost.winner(), None);
        assert!(!lost.is_champion());

        let champion = RoundEnding::Champion {
            winner: 1,
            name: "Bia".into(),
            score: 510,
            trophies: 1,
            word: "UVA".into(),
            translation: "Grape".into(),
        };
        assert_eq!(champion.winner(), Some(1));
        assert!(champion.is_champion());
    }
}
