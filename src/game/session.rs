//! Session state: players, the current round and the undo history
//!
//! Snapshots are plain value copies. Restoring one puts the session back into
//! exactly the state it was in when the snapshot was taken.

use super::{GameError, RoundEnding};
use crate::core::{LetterSet, Player, PlayerColor, SecretWord, WordEntry};

/// Fewest players a session accepts
pub const MIN_PLAYERS: usize = 1;
/// Most players a session accepts (one per seat color)
pub const MAX_PLAYERS: usize = PlayerColor::PALETTE.len();

/// One play-through of a single secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) entry: WordEntry,
    pub(crate) guessed: LetterSet,
    pub(crate) wrong_guesses: u32,
    pub(crate) hints_used: u32,
    pub(crate) active: bool,
    pub(crate) ending: Option<RoundEnding>,
}

impl Round {
    pub(crate) fn new(entry: WordEntry) -> Self {
        Self {
            entry,
            guessed: LetterSet::EMPTY,
            wrong_guesses: 0,
            hints_used: 0,
            active: true,
            ending: None,
        }
    }

    #[must_use]
    pub const fn entry(&self) -> &WordEntry {
        &self.entry
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        self.entry.secret()
    }

    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// Guessed letters that are not in the word
    #[must_use]
    pub fn wrong_letters(&self) -> LetterSet {
        self.guessed
            .iter()
            .filter(|&c| !self.secret().contains(c))
            .collect()
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Every letter of the secret word has been guessed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.secret().is_revealed_by(self.guessed)
    }

    /// How the round finished, once it has
    #[must_use]
    pub const fn ending(&self) -> Option<&RoundEnding> {
        self.ending.as_ref()
    }
}

/// Saved copy of round progress and players
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub current_player: usize,
    pub guessed: LetterSet,
    pub wrong_guesses: u32,
    pub hints_used: u32,
}

/// Undo stack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    stack: Vec<Snapshot>,
}

impl History {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.stack.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.stack.pop()
    }

    /// The snapshot the next undo would restore
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot> {
        self.stack.last()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Everything a game session owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    players: Vec<Player>,
    current_player: usize,
    round: Option<Round>,
    history: History,
}

impl Session {
    /// Create a session for the given players
    ///
    /// # Errors
    /// Returns `GameError::PlayerCount` unless there are between
    /// [`MIN_PLAYERS`] and [`MAX_PLAYERS`] players.
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(GameError::PlayerCount {
                count: players.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        Ok(Self {
            players,
            current_player: 0,
            round: None,
            history: History::default(),
        })
    }

    /// Create `count` players, naming them from `names` where given
    ///
    /// Missing or blank names fall back to `Player N`; seats get palette
    /// colors in order.
    ///
    /// # Errors
    /// Returns `GameError::PlayerCount` if `count` is out of range.
    ///
    /// # Examples
    /// ```
    /// use hangman_party::game::Session;
    ///
    /// let session = Session::from_names(2, &["Ana"]).unwrap();
    /// assert_eq!(session.players()[0].name, "Ana");
    /// assert_eq!(session.players()[1].name, "Player 2");
    /// ```
    pub fn from_names<S: AsRef<str>>(count: usize, names: &[S]) -> Result<Self, GameError> {
        let players = (0..count)
            .map(|seat| {
                let name = names
                    .get(seat)
                    .map(|n| n.as_ref().trim())
                    .filter(|n| !n.is_empty())
                    .map_or_else(|| Player::default_name(seat), str::to_string);
                Player::new(name, PlayerColor::for_seat(seat))
            })
            .collect();
        Self::new(players)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player whose turn it is
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// A round is in progress
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.round.as_ref().is_some_and(Round::is_active)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.is_active() && !self.history.is_empty()
    }

    pub(crate) fn round_mut(&mut self) -> Option<&mut Round> {
        self.round.as_mut()
    }

    pub(crate) fn active_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player]
    }

    /// Replace the round and drop all history
    pub(crate) fn begin_round(&mut self, entry: WordEntry) {
        self.round = Some(Round::new(entry));
        self.history.clear();
    }

    pub(crate) fn snapshot(&self) -> Option<Snapshot> {
        self.round.as_ref().map(|round| Snapshot {
            players: self.players.clone(),
            current_player: self.current_player,
            guessed: round.guessed,
            wrong_guesses: round.wrong_guesses,
            hints_used: round.hints_used,
        })
    }

    pub(crate) fn push_snapshot(&mut self) {
        if let Some(snapshot) = self.snapshot() {
            self.history.push(snapshot);
        }
    }

    /// Pop the latest snapshot and restore it
    pub(crate) fn restore_last(&mut self) -> Option<Snapshot> {
        let snapshot = self.history.pop()?;
        self.players.clone_from(&snapshot.players);
        self.current_player = snapshot.current_player;
        if let Some(round) = self.round.as_mut() {
            round.guessed = snapshot.guessed;
            round.wrong_guesses = snapshot.wrong_guesses;
            round.hints_used = snapshot.hints_used;
        }
        Some(snapshot)
    }

    /// Hand the turn to the next seat, round-robin
    pub(crate) fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
    }

    pub(crate) fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> WordEntry {
        WordEntry::new(word, "Teste", "Dica", "Translation").unwrap()
    }

    #[test]
    fn rejects_bad_player_counts() {
        assert_eq!(
            Session::from_names::<&str>(0, &[]),
            Err(GameError::PlayerCount {
                count: 0,
                min: 1,
                max: 5
            })
        );
        assert!(Session::from_names::<&str>(6, &[]).is_err());
        assert!(Session::from_names::<&str>(5, &[]).is_ok());
    }

    #[test]
    fn blank_names_use_defaults_and_colors_follow_seats() {
        let session = Session::from_names(3, &["  ", "Bia"]).unwrap();
        let names: Vec<_> = session.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Player 1", "Bia", "Player 3"]);
        assert_eq!(session.players()[2].color, PlayerColor::Green);
    }

    #[test]
    fn turn_order_is_round_robin() {
        let mut session = Session::from_names::<&str>(3, &[]).unwrap();
        let mut order = Vec::new();
        for _ in 0..4 {
            session.advance_turn();
            order.push(session.current_player());
        }
        assert_eq!(order, vec![1, 2, 0, 1]);
    }

    #[test]
    fn no_round_means_inactive() {
        let session = Session::from_names::<&str>(1, &[]).unwrap();
        assert!(!session.is_active());
        assert!(session.round().is_none());
        assert!(session.snapshot().is_none());
    }

    #[test]
    fn begin_round_clears_history() {
        let mut session = Session::from_names::<&str>(1, &[]).unwrap();
        session.begin_round(entry("gato"));
        session.push_snapshot();
        session.push_snapshot();
        assert_eq!(session.history().len(), 2);

        session.begin_round(entry("uva"));
        assert!(session.history().is_empty());
        assert!(session.is_active());
    }

    #[test]
    fn restore_last_reverts_everything_saved() {
        let mut session = Session::from_names::<&str>(2, &[]).unwrap();
        session.begin_round(entry("gato"));
        session.push_snapshot();
        let saved = session.history().last().cloned().unwrap();

        session.players[0].score = 40;
        session.advance_turn();
        if let Some(round) = session.round_mut() {
            round.guessed.insert('G');
            round.wrong_guesses = 2;
            round.hints_used = 1;
        }

        assert_eq!(session.restore_last(), Some(saved.clone()));
        assert_eq!(session.snapshot(), Some(saved));
        assert!(session.history().is_empty());
        assert_eq!(session.restore_last(), None);
    }

    #[test]
    fn wrong_letters_excludes_hits() {
        let mut session = Session::from_names::<&str>(1, &[]).unwrap();
        session.begin_round(entry("gato"));
        let round = session.round_mut().unwrap();
        for c in ['G', 'X', 'O', 'Z'] {
            round.guessed.insert(c);
        }
        assert_eq!(round.wrong_letters().to_string(), "XZ");
    }
}
