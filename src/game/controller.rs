//! Round/turn controller
//!
//! Owns the session and the word pool, applies player actions, and tells the
//! presenter what changed. Invalid actions are ignored rather than reported:
//! guessing outside a round, repeating a letter, asking for a hint with none
//! left, undoing with no history.

use super::presenter::{HintView, Presenter, RoundEnding};
use super::session::{Round, Session};
use super::{GameError, NullPresenter};
use crate::core::{GameConfig, WordEntry, normalize_letter};
use crate::wordlists::WordPool;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

/// Result of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Nothing happened: no active round, repeated letter, or not a letter
    Ignored,
    /// The letter is in the word; the same player keeps the turn
    Hit { occurrences: usize, points: u32 },
    /// The letter is not in the word
    Miss { wrong_guesses: u32 },
}

/// Result of asking for a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// Hint budget exhausted or no active round
    Ignored,
    /// The textual clue is now visible
    Clue,
    /// This letter was revealed through a guess
    Letter(char),
}

/// Applies game actions to a session
pub struct Controller<P = NullPresenter> {
    session: Session,
    pool: WordPool,
    config: GameConfig,
    rng: StdRng,
    presenter: P,
}

impl<P: Presenter> Controller<P> {
    /// Create a controller with an OS-seeded random source
    ///
    /// No round is started; call [`Controller::start_round`].
    pub fn new(session: Session, pool: WordPool, config: GameConfig, presenter: P) -> Self {
        Self {
            session,
            pool,
            config,
            rng: StdRng::from_os_rng(),
            presenter,
        }
    }

    /// Replace the random source with a seeded one
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The current round, if one was ever started
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.session.round()
    }

    /// Hint panel state for the current round
    #[must_use]
    pub fn hint_view(&self) -> Option<HintView<'_>> {
        hint_view(&self.session, &self.config)
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Start a round with a random entry from the pool
    ///
    /// Guess state and history are reset; the turn stays with the current
    /// player.
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` (after alerting the presenter) if the
    /// pool has no entries.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        let Some(entry) = self.pool.choose(&mut self.rng).cloned() else {
            warn!("cannot start a round from an empty word pool");
            self.presenter
                .alert("No words available for the selected category.");
            return Err(GameError::EmptyPool);
        };
        self.start_round_with(entry);
        Ok(())
    }

    /// Start a round with a specific entry
    pub fn start_round_with(&mut self, entry: WordEntry) {
        info!(
            category = entry.category(),
            letters = entry.secret().len(),
            player = self.session.current_player(),
            "starting round"
        );
        debug!(secret = %entry.secret(), "secret word chosen");
        self.session.begin_round(entry);
        self.render();
    }

    /// Guess a letter for the current player
    ///
    /// A hit scores `points_per_letter` per occurrence and keeps the turn; a
    /// miss counts against the gallows and passes the turn on.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let Some(letter) = normalize_letter(letter) else {
            return GuessOutcome::Ignored;
        };
        let Some(occurrences) = self
            .session
            .round()
            .filter(|round| round.is_active() && !round.guessed().contains(letter))
            .map(|round| round.secret().occurrences(letter))
        else {
            return GuessOutcome::Ignored;
        };

        self.session.push_snapshot();
        let Some(round) = self.session.round_mut() else {
            return GuessOutcome::Ignored;
        };
        round.guessed.insert(letter);

        if occurrences > 0 {
            let points = self
                .config
                .points_per_letter
                .saturating_mul(u32::try_from(occurrences).unwrap_or(u32::MAX));
            let player = self.session.active_player_mut();
            player.score = player.score.saturating_add(points);
            debug!(%letter, occurrences, points, player = %player.name, "hit");

            self.render();
            if !self.check_tournament_win() {
                self.check_win();
            }
            GuessOutcome::Hit {
                occurrences,
                points,
            }
        } else {
            round.wrong_guesses += 1;
            let wrong_guesses = round.wrong_guesses;
            debug!(%letter, wrong_guesses, "miss");

            if !self.check_loss() {
                self.session.advance_turn();
            }
            self.render();
            GuessOutcome::Miss { wrong_guesses }
        }
    }

    /// Word complete: award the bonus, then either crown a champion or end
    /// the round as a win
    fn check_win(&mut self) -> bool {
        if !self.session.round().is_some_and(Round::is_solved) {
            return false;
        }

        let bonus = self.config.points_per_win;
        let player = self.session.active_player_mut();
        player.score = player.score.saturating_add(bonus);

        if !self.check_tournament_win() {
            let (word, translation) = self.reveal();
            let ending = RoundEnding::Won {
                winner: self.session.current_player(),
                name: self.session.active_player().name.clone(),
                word,
                translation,
            };
            self.end_round(ending);
        }
        true
    }

    /// Current player reached the grand-win score: one more trophy, everyone
    /// back to zero
    fn check_tournament_win(&mut self) -> bool {
        let score = self.session.active_player().score;
        if score < self.config.grand_win_score {
            return false;
        }

        let winner = self.session.current_player();
        let player = self.session.active_player_mut();
        player.trophies += 1;
        let trophies = player.trophies;
        let name = player.name.clone();
        self.session.reset_scores();
        info!(%name, score, trophies, "tournament won");

        let (word, translation) = self.reveal();
        self.end_round(RoundEnding::Champion {
            winner,
            name,
            score,
            trophies,
            word,
            translation,
        });
        true
    }

    fn check_loss(&mut self) -> bool {
        let max = self.config.max_wrong_guesses;
        if !self
            .session
            .round()
            .is_some_and(|round| round.wrong_guesses() >= max)
        {
            return false;
        }

        let (word, translation) = self.reveal();
        self.end_round(RoundEnding::Lost { word, translation });
        true
    }

    /// Use one hint
    ///
    /// The first hint shows the clue. Each later hint reveals a random
    /// unrevealed letter by guessing it for the current player, so it scores
    /// like a normal hit and records its own history entry.
    pub fn use_hint(&mut self) -> HintOutcome {
        let max_hints = self.config.max_hints;
        if !self
            .session
            .round()
            .is_some_and(|round| round.is_active() && round.hints_used() < max_hints)
        {
            return HintOutcome::Ignored;
        }

        self.session.push_snapshot();
        let Some(round) = self.session.round_mut() else {
            return HintOutcome::Ignored;
        };
        round.hints_used += 1;
        let hints_used = round.hints_used;
        let unrevealed = round.secret().unrevealed(round.guessed());

        let outcome = if hints_used == 1 {
            HintOutcome::Clue
        } else if let Some(&letter) = unrevealed.choose(&mut self.rng) {
            self.guess(letter);
            HintOutcome::Letter(letter)
        } else {
            HintOutcome::Clue
        };

        debug!(hints_used, ?outcome, "hint used");
        self.render_hint();
        outcome
    }

    /// Restore the most recent snapshot
    ///
    /// Returns `false` if there is nothing to undo or the round is over.
    pub fn undo(&mut self) -> bool {
        if !self.session.can_undo() {
            return false;
        }
        if self.session.restore_last().is_none() {
            return false;
        }
        debug!(remaining = self.session.history().len(), "undo");
        self.render();
        true
    }

    /// Give the turn to the next player without guessing
    ///
    /// Only meaningful with two or more players in an active round.
    pub fn pass_turn(&mut self) -> bool {
        if !self.session.is_active() || self.session.players().len() < 2 {
            return false;
        }
        self.session.push_snapshot();
        self.session.advance_turn();
        debug!(player = self.session.current_player(), "turn passed");
        self.render_scoreboard();
        true
    }

    /// Abandon the current word without scoring and start another
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if the pool has no entries.
    pub fn next_word(&mut self) -> Result<(), GameError> {
        if let Some(round) = self.session.round() {
            info!(active = round.is_active(), "skipping to next word");
        }
        self.start_round()
    }

    /// Zero every score (trophies stay) and start a fresh round
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if the pool has no entries.
    pub fn new_tournament(&mut self) -> Result<(), GameError> {
        info!("starting new tournament");
        self.session.reset_scores();
        self.start_round()
    }

    fn reveal(&self) -> (String, String) {
        self.session.round().map_or_else(Default::default, |round| {
            (
                round.secret().as_str().to_string(),
                round.entry().translation().to_string(),
            )
        })
    }

    fn end_round(&mut self, ending: RoundEnding) {
        if let Some(round) = self.session.round_mut() {
            round.active = false;
            round.ending = Some(ending.clone());
        }
        info!(word = ending.word(), winner = ?ending.winner(), "round over");
        self.render_scoreboard();
        self.presenter.round_over(&ending);
    }

    fn render(&mut self) {
        self.render_scoreboard();
        if let Some(round) = self.session.round() {
            self.presenter.word(round.secret(), round.guessed());
            self.presenter.keyboard(round.secret(), round.guessed());
            self.presenter
                .gallows(round.wrong_guesses(), self.config.max_wrong_guesses);
        }
        self.render_hint();
    }

    fn render_scoreboard(&mut self) {
        self.presenter
            .scoreboard(self.session.players(), self.session.current_player());
    }

    fn render_hint(&mut self) {
        let view = hint_view(&self.session, &self.config);
        if let Some(view) = view {
            self.presenter.hint(&view);
        }
    }
}

fn hint_view<'a>(session: &'a Session, config: &GameConfig) -> Option<HintView<'a>> {
    session.round().map(|round| HintView {
        clue: (round.hints_used() > 0).then(|| round.entry().hint()),
        hints_used: round.hints_used(),
        max_hints: config.max_hints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterSet, Player};

    #[derive(Debug, Default)]
    struct Recorder {
        endings: Vec<RoundEnding>,
        alerts: Vec<String>,
        last_scoreboard: Vec<Player>,
        last_active: usize,
        last_clue: Option<String>,
        words_rendered: usize,
    }

    impl Presenter for Recorder {
        fn scoreboard(&mut self, players: &[Player], active: usize) {
            self.last_scoreboard = players.to_vec();
            self.last_active = active;
        }

        fn word(&mut self, _secret: &crate::core::SecretWord, _guessed: LetterSet) {
            self.words_rendered += 1;
        }

        fn hint(&mut self, hint: &HintView<'_>) {
            self.last_clue = hint.clue.map(str::to_string);
        }

        fn round_over(&mut self, ending: &RoundEnding) {
            self.endings.push(ending.clone());
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    fn entry(word: &str) -> WordEntry {
        WordEntry::new(word, "Animais", "Mia e caça ratos", "Cat").unwrap()
    }

    fn controller(players: usize, config: GameConfig) -> Controller<Recorder> {
        let session = Session::from_names::<&str>(players, &[]).unwrap();
        let pool: WordPool = [entry("gato"), entry("uva")].into_iter().collect();
        Controller::new(session, pool, config, Recorder::default()).with_seed(42)
    }

    fn with_word(players: usize, word: &str) -> Controller<Recorder> {
        let mut ctrl = controller(players, GameConfig::default());
        ctrl.start_round_with(entry(word));
        ctrl
    }

    #[test]
    fn gato_single_player_wins_with_one_bonus() {
        let mut ctrl = with_word(1, "gato");
        for letter in ['G', 'A', 'T', 'O'] {
            assert!(matches!(ctrl.guess(letter), GuessOutcome::Hit { .. }));
        }

        let round = ctrl.round().unwrap();
        assert!(!round.is_active());
        assert_eq!(round.wrong_guesses(), 0);
        assert_eq!(ctrl.session().players()[0].score, 4 * 10 + 50);
        assert_eq!(ctrl.presenter().endings.len(), 1);
        assert!(matches!(
            &ctrl.presenter().endings[0],
            RoundEnding::Won { winner: 0, word, .. } if word == "GATO"
        ));
    }

    #[test]
    fn hit_scores_per_occurrence_and_keeps_turn() {
        let mut ctrl = with_word(2, "banana");
        assert_eq!(
            ctrl.guess('a'),
            GuessOutcome::Hit {
                occurrences: 3,
                points: 30
            }
        );
        assert_eq!(ctrl.session().current_player(), 0);
        assert_eq!(ctrl.session().players()[0].score, 30);
    }

    #[test]
    fn miss_passes_turn_round_robin() {
        let mut ctrl = with_word(3, "gato");
        assert_eq!(ctrl.guess('x'), GuessOutcome::Miss { wrong_guesses: 1 });
        assert_eq!(ctrl.session().current_player(), 1);
        ctrl.guess('y');
        ctrl.guess('z');
        assert_eq!(ctrl.session().current_player(), 0);
        assert_eq!(ctrl.presenter().last_active, 0);
    }

    #[test]
    fn repeated_and_invalid_letters_are_ignored() {
        let mut ctrl = with_word(1, "gato");
        ctrl.guess('g');
        let history = ctrl.session().history().len();

        assert_eq!(ctrl.guess('G'), GuessOutcome::Ignored);
        assert_eq!(ctrl.guess('7'), GuessOutcome::Ignored);
        assert_eq!(ctrl.guess('ç'), GuessOutcome::Ignored);
        assert_eq!(ctrl.session().history().len(), history);
        assert_eq!(ctrl.session().players()[0].score, 10);
    }

    #[test]
    fn loss_at_max_wrong_guesses_ends_round() {
        let config = GameConfig {
            max_wrong_guesses: 3,
            ..GameConfig::default()
        };
        let mut ctrl = controller(1, config);
        ctrl.start_round_with(entry("gato"));

        ctrl.guess('x');
        ctrl.guess('y');
        assert!(ctrl.session().is_active());
        ctrl.guess('z');

        let round = ctrl.round().unwrap();
        assert!(!round.is_active());
        assert_eq!(round.wrong_guesses(), 3);
        assert_eq!(
            ctrl.presenter().endings,
            vec![RoundEnding::Lost {
                word: "GATO".into(),
                translation: "Cat".into()
            }]
        );
        assert_eq!(ctrl.guess('g'), GuessOutcome::Ignored);
    }

    #[test]
    fn losing_guess_does_not_pass_turn() {
        let config = GameConfig {
            max_wrong_guesses: 1,
            ..GameConfig::default()
        };
        let mut ctrl = controller(2, config);
        ctrl.start_round_with(entry("gato"));
        ctrl.guess('x');
        assert_eq!(ctrl.session().current_player(), 0);
    }

    #[test]
    fn first_hint_is_clue_then_letters() {
        let mut ctrl = with_word(1, "gato");

        assert_eq!(ctrl.use_hint(), HintOutcome::Clue);
        assert_eq!(ctrl.presenter().last_clue.as_deref(), Some("Mia e caça ratos"));
        assert_eq!(ctrl.session().history().len(), 1);

        let HintOutcome::Letter(letter) = ctrl.use_hint() else {
            panic!("second hint should reveal a letter");
        };
        assert!("GATO".contains(letter));
        assert!(ctrl.round().unwrap().guessed().contains(letter));
        // hint usage and the implied guess each leave an undo step
        assert_eq!(ctrl.session().history().len(), 3);
        assert_eq!(ctrl.session().players()[0].score, 10);
    }

    #[test]
    fn hints_stop_at_budget() {
        let mut ctrl = with_word(1, "elefante");
        assert_eq!(ctrl.use_hint(), HintOutcome::Clue);
        assert!(matches!(ctrl.use_hint(), HintOutcome::Letter(_)));
        assert!(matches!(ctrl.use_hint(), HintOutcome::Letter(_)));
        assert_eq!(ctrl.use_hint(), HintOutcome::Ignored);
        assert_eq!(ctrl.round().unwrap().hints_used(), 3);
    }

    #[test]
    fn zero_hint_budget_ignores_hints() {
        let config = GameConfig {
            max_hints: 0,
            ..GameConfig::default()
        };
        let mut ctrl = controller(1, config);
        ctrl.start_round_with(entry("gato"));
        assert_eq!(ctrl.use_hint(), HintOutcome::Ignored);
        assert!(ctrl.session().history().is_empty());
    }

    #[test]
    fn undo_steps_back_one_action_at_a_time() {
        let mut ctrl = with_word(2, "gato");
        ctrl.guess('g');
        ctrl.guess('x');
        assert_eq!(ctrl.session().current_player(), 1);

        assert!(ctrl.undo());
        assert_eq!(ctrl.session().current_player(), 0);
        assert_eq!(ctrl.round().unwrap().wrong_guesses(), 0);
        assert!(!ctrl.round().unwrap().guessed().contains('X'));
        assert_eq!(ctrl.session().players()[0].score, 10);

        assert!(ctrl.undo());
        assert_eq!(ctrl.session().players()[0].score, 0);
        assert!(ctrl.round().unwrap().guessed().is_empty());

        assert!(!ctrl.undo());
    }

    #[test]
    fn undo_hint_letter_then_hint_usage() {
        let mut ctrl = with_word(1, "gato");
        ctrl.use_hint();
        ctrl.use_hint();

        assert!(ctrl.undo());
        assert_eq!(ctrl.round().unwrap().hints_used(), 2);
        assert!(ctrl.round().unwrap().guessed().is_empty());

        assert!(ctrl.undo());
        assert_eq!(ctrl.round().unwrap().hints_used(), 1);
    }

    #[test]
    fn undo_is_blocked_after_round_ends() {
        let mut ctrl = with_word(1, "uva");
        for letter in ['U', 'V', 'A'] {
            ctrl.guess(letter);
        }
        assert!(!ctrl.session().is_active());
        assert!(!ctrl.undo());
    }

    #[test]
    fn pass_turn_requires_multiplayer() {
        let mut solo = with_word(1, "gato");
        assert!(!solo.pass_turn());
        assert!(solo.session().history().is_empty());

        let mut duo = with_word(2, "gato");
        assert!(duo.pass_turn());
        assert_eq!(duo.session().current_player(), 1);
        assert_eq!(duo.round().unwrap().wrong_guesses(), 0);
        assert!(duo.undo());
        assert_eq!(duo.session().current_player(), 0);
    }

    #[test]
    fn next_word_abandons_without_scoring() {
        let mut ctrl = with_word(1, "gato");
        ctrl.guess('g');
        ctrl.next_word().unwrap();

        let round = ctrl.round().unwrap();
        assert!(round.is_active());
        assert!(round.guessed().is_empty());
        assert!(ctrl.session().history().is_empty());
        assert_eq!(ctrl.session().players()[0].score, 10);
        assert!(ctrl.presenter().endings.is_empty());
    }

    #[test]
    fn tournament_win_on_round_bonus_resets_scores() {
        let config = GameConfig {
            grand_win_score: 60,
            ..GameConfig::default()
        };
        let mut ctrl = controller(2, config);
        ctrl.start_round_with(entry("gato"));
        for letter in ['G', 'A', 'T', 'O'] {
            ctrl.guess(letter);
        }

        let players = ctrl.session().players();
        assert_eq!(players[0].trophies, 1);
        assert!(players.iter().all(|p| p.score == 0));
        assert_eq!(
            ctrl.presenter().endings,
            vec![RoundEnding::Champion {
                winner: 0,
                name: "Player 1".into(),
                score: 90,
                trophies: 1,
                word: "GATO".into(),
                translation: "Cat".into(),
            }]
        );
    }

    #[test]
    fn tournament_win_on_letter_points_ends_round_early() {
        let config = GameConfig {
            grand_win_score: 30,
            ..GameConfig::default()
        };
        let mut ctrl = controller(1, config);
        ctrl.start_round_with(entry("gato"));
        ctrl.guess('g');
        ctrl.guess('a');
        assert!(ctrl.session().is_active());
        ctrl.guess('t');

        assert!(!ctrl.session().is_active());
        assert_eq!(ctrl.presenter().endings.len(), 1);
        assert!(ctrl.presenter().endings[0].is_champion());
        assert_eq!(ctrl.session().players()[0].score, 0);
    }

    #[test]
    fn new_tournament_keeps_trophies() {
        let config = GameConfig {
            grand_win_score: 30,
            ..GameConfig::default()
        };
        let mut ctrl = controller(1, config);
        ctrl.start_round_with(entry("gato"));
        for letter in ['G', 'A', 'T'] {
            ctrl.guess(letter);
        }
        ctrl.new_tournament().unwrap();

        assert!(ctrl.session().is_active());
        assert_eq!(ctrl.session().players()[0].trophies, 1);
        assert_eq!(ctrl.session().players()[0].score, 0);
    }

    #[test]
    fn empty_pool_alerts() {
        let session = Session::from_names::<&str>(1, &[]).unwrap();
        let mut ctrl = Controller::new(
            session,
            WordPool::default(),
            GameConfig::default(),
            Recorder::default(),
        );

        assert_eq!(ctrl.start_round(), Err(GameError::EmptyPool));
        assert_eq!(ctrl.presenter().alerts.len(), 1);
        assert!(ctrl.round().is_none());
        assert_eq!(ctrl.guess('a'), GuessOutcome::Ignored);
        assert_eq!(ctrl.use_hint(), HintOutcome::Ignored);
        assert!(!ctrl.undo());
        assert!(!ctrl.pass_turn());
    }

    #[test]
    fn start_round_keeps_active_player() {
        let mut ctrl = with_word(2, "gato");
        ctrl.guess('x');
        assert_eq!(ctrl.session().current_player(), 1);
        ctrl.start_round().unwrap();
        assert_eq!(ctrl.session().current_player(), 1);
        assert!(ctrl.presenter().words_rendered >= 2);
    }
}
