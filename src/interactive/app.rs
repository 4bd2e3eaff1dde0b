//! TUI application state and logic

use crate::core::{GameConfig, normalize_letter};
use crate::game::{
    Controller, GuessOutcome, HintOutcome, MAX_PLAYERS, MIN_PLAYERS, Presenter, RoundEnding,
    Session,
};
use crate::wordlists::WordPool;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const MAX_MESSAGES: usize = 5;
const MAX_NAME_LEN: usize = 16;
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Presenter for the TUI
///
/// Board state is drawn straight from the session every frame, so only the
/// message log and the delayed round-end modal live here.
#[derive(Debug, Clone, Default)]
pub struct TuiPresenter {
    delay: Duration,
    messages: Vec<Message>,
    pending: Option<(RoundEnding, Instant)>,
    modal: Option<RoundEnding>,
}

impl TuiPresenter {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Round-end notice, once its delay has passed
    #[must_use]
    pub const fn modal(&self) -> Option<&RoundEnding> {
        self.modal.as_ref()
    }

    /// Show the pending round-end notice if it is due
    pub fn tick(&mut self, now: Instant) {
        if self.pending.as_ref().is_some_and(|(_, due)| *due <= now) {
            self.modal = self.pending.take().map(|(ending, _)| ending);
        }
    }

    pub fn dismiss(&mut self) {
        self.pending = None;
        self.modal = None;
    }
}

impl Presenter for TuiPresenter {
    fn round_over(&mut self, ending: &RoundEnding) {
        let now = Instant::now();
        let due = now.checked_add(self.delay).unwrap_or(now);
        self.pending = Some((ending.clone(), due));
    }

    fn alert(&mut self, message: &str) {
        self.add_message(message, MessageStyle::Error);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Playing,
}

/// Which setup row has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Players,
    Name(usize),
    Category,
}

/// Setup screen state: player count, names and category
#[derive(Debug, Clone)]
pub struct SetupState {
    pub player_count: usize,
    /// One slot per possible seat; only the first `player_count` are used
    pub names: Vec<String>,
    pub categories: Vec<String>,
    /// Index into `categories`; `None` plays every category
    pub category: Option<usize>,
    pub focus: SetupField,
    pub error: Option<String>,
}

impl SetupState {
    #[must_use]
    pub fn new(pool: &WordPool, player_count: usize, names: &[String], category: Option<&str>) -> Self {
        let categories: Vec<String> = pool.categories().into_iter().map(|(name, _)| name).collect();
        let category = category.and_then(|wanted| {
            let wanted = wanted.trim().to_lowercase();
            categories.iter().position(|c| c.to_lowercase() == wanted)
        });

        let mut slots = vec![String::new(); MAX_PLAYERS];
        for (slot, name) in slots.iter_mut().zip(names) {
            slot.clone_from(name);
        }

        Self {
            player_count: player_count.clamp(MIN_PLAYERS, MAX_PLAYERS),
            names: slots,
            categories,
            category,
            focus: SetupField::Players,
            error: None,
        }
    }

    #[must_use]
    pub fn category_label(&self) -> &str {
        self.selected_category().unwrap_or("All")
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.category
            .and_then(|i| self.categories.get(i))
            .map(String::as_str)
    }

    fn fields(&self) -> Vec<SetupField> {
        let mut fields = vec![SetupField::Players];
        fields.extend((0..self.player_count).map(SetupField::Name));
        fields.push(SetupField::Category);
        fields
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
    }

    /// Left/right on the player count or the category
    fn adjust(&mut self, forward: bool) {
        match self.focus {
            SetupField::Players => {
                self.player_count = if forward {
                    (self.player_count + 1).min(MAX_PLAYERS)
                } else {
                    self.player_count.saturating_sub(1).max(MIN_PLAYERS)
                };
            }
            SetupField::Category => {
                // slot 0 is "All"
                let options = self.categories.len() + 1;
                let current = self.category.map_or(0, |i| i + 1);
                let next = if forward {
                    (current + 1) % options
                } else {
                    (current + options - 1) % options
                };
                self.category = next.checked_sub(1);
            }
            SetupField::Name(_) => {}
        }
    }

    fn type_char(&mut self, c: char) {
        if let SetupField::Name(seat) = self.focus
            && let Some(name) = self.names.get_mut(seat)
            && !c.is_control()
            && name.chars().count() < MAX_NAME_LEN
        {
            name.push(c);
        }
    }

    fn backspace(&mut self) {
        if let SetupField::Name(seat) = self.focus
            && let Some(name) = self.names.get_mut(seat)
        {
            name.pop();
        }
    }
}

/// Application state
pub struct App {
    pub screen: Screen,
    pub setup: SetupState,
    pub game: Option<Controller<TuiPresenter>>,
    pub should_quit: bool,
    pool: WordPool,
    config: GameConfig,
    seed: Option<u64>,
}

impl App {
    #[must_use]
    pub const fn new(pool: WordPool, config: GameConfig, setup: SetupState, seed: Option<u64>) -> Self {
        Self {
            screen: Screen::Setup,
            setup,
            game: None,
            should_quit: false,
            pool,
            config,
            seed,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a session from the setup screen and start the first round
    ///
    /// Stays on the setup screen with an error if that fails.
    pub fn start_game(&mut self) {
        let pool = match self.setup.selected_category() {
            Some(category) => self.pool.filtered(category),
            None => self.pool.clone(),
        };
        let names = &self.setup.names[..self.setup.player_count];
        let session = match Session::from_names(self.setup.player_count, names) {
            Ok(session) => session,
            Err(err) => {
                self.setup.error = Some(err.to_string());
                return;
            }
        };

        let presenter = TuiPresenter::new(self.config.round_end_delay);
        let mut controller = Controller::new(session, pool, self.config.clone(), presenter);
        if let Some(seed) = self.seed {
            controller = controller.with_seed(seed);
        }
        if let Err(err) = controller.start_round() {
            self.setup.error = Some(err.to_string());
            return;
        }

        info!(
            players = self.setup.player_count,
            category = self.setup.category_label(),
            "game started"
        );
        controller
            .presenter_mut()
            .add_message("Type a letter to guess. Good luck!", MessageStyle::Info);
        self.setup.error = None;
        self.game = Some(controller);
        self.screen = Screen::Playing;
    }

    /// Show any round-end notice that has become due
    pub fn tick(&mut self, now: Instant) {
        if let Some(game) = self.game.as_mut() {
            game.presenter_mut().tick(now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Setup => self.handle_setup_key(key.code),
            Screen::Playing => self.handle_game_key(key.code),
        }
    }

    fn handle_setup_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.start_game(),
            KeyCode::Down | KeyCode::Tab => self.setup.move_focus(true),
            KeyCode::Up | KeyCode::BackTab => self.setup.move_focus(false),
            KeyCode::Right => self.setup.adjust(true),
            KeyCode::Left => self.setup.adjust(false),
            KeyCode::Backspace => self.setup.backspace(),
            KeyCode::Char(c) => self.setup.type_char(c),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        if game.presenter().modal().is_some() {
            match code {
                KeyCode::Enter | KeyCode::Char(' ' | '4') => next_word(game),
                KeyCode::Char('5') => new_tournament(game),
                KeyCode::Esc => game.presenter_mut().dismiss(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => use_hint(game),
            KeyCode::Char('2') => undo(game),
            KeyCode::Char('3') => pass_turn(game),
            KeyCode::Char('4') => next_word(game),
            KeyCode::Char('5') => new_tournament(game),
            KeyCode::Char(c) => {
                if let Some(letter) = normalize_letter(c) {
                    guess(game, letter);
                }
            }
            _ => {}
        }
    }
}

fn guess(game: &mut Controller<TuiPresenter>, letter: char) {
    let active = game.session().is_active();
    let (text, style) = match game.guess(letter) {
        GuessOutcome::Hit {
            occurrences,
            points,
        } => (
            format!("✓ {letter} ×{occurrences} (+{points})"),
            MessageStyle::Success,
        ),
        GuessOutcome::Miss { .. } => (format!("✗ No {letter}"), MessageStyle::Error),
        GuessOutcome::Ignored if active => (format!("{letter} was already guessed"), MessageStyle::Info),
        GuessOutcome::Ignored => return,
    };
    game.presenter_mut().add_message(text, style);
}

fn use_hint(game: &mut Controller<TuiPresenter>) {
    let text = match game.use_hint() {
        HintOutcome::Clue => "💡 Clue revealed".to_string(),
        HintOutcome::Letter(letter) => format!("💡 Revealed {letter}"),
        HintOutcome::Ignored => "No hints left".to_string(),
    };
    game.presenter_mut().add_message(text, MessageStyle::Info);
}

fn undo(game: &mut Controller<TuiPresenter>) {
    let (text, style) = if game.undo() {
        ("↩ Undone", MessageStyle::Info)
    } else {
        ("Nothing to undo", MessageStyle::Error)
    };
    game.presenter_mut().add_message(text, style);
}

fn pass_turn(game: &mut Controller<TuiPresenter>) {
    if game.pass_turn() {
        let text = format!("{}'s turn", game.session().active_player().name);
        game.presenter_mut().add_message(text, MessageStyle::Info);
    } else {
        game.presenter_mut()
            .add_message("Passing needs two or more players", MessageStyle::Error);
    }
}

fn next_word(game: &mut Controller<TuiPresenter>) {
    game.presenter_mut().dismiss();
    // an empty pool has already been reported through the presenter
    if let Err(err) = game.next_word() {
        debug!(%err, "next word unavailable");
    }
}

fn new_tournament(game: &mut Controller<TuiPresenter>) {
    game.presenter_mut().dismiss();
    match game.new_tournament() {
        Ok(()) => game
            .presenter_mut()
            .add_message("🔄 New tournament! Scores reset", MessageStyle::Success),
        Err(err) => debug!(%err, "new tournament unavailable"),
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn gato_pool() -> WordPool {
        [
            WordEntry::new("gato", "Animais", "Mia", "Cat").unwrap(),
            WordEntry::new("uva", "Frutas", "Cacho", "Grape").unwrap(),
        ]
        .into_iter()
        .collect()
    }

    fn app(category: Option<&str>) -> App {
        let pool = gato_pool();
        let config = GameConfig {
            round_end_delay: Duration::ZERO,
            ..GameConfig::default()
        };
        let setup = SetupState::new(&pool, 2, &["Ana".to_string()], category);
        App::new(pool, config, setup, Some(3))
    }

    #[test]
    fn setup_prefills_from_arguments() {
        let app = app(Some("frutas"));
        assert_eq!(app.setup.player_count, 2);
        assert_eq!(app.setup.names[0], "Ana");
        assert_eq!(app.setup.category_label(), "Frutas");
    }

    #[test]
    fn setup_adjusts_count_and_category() {
        let mut app = app(None);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.setup.player_count, MAX_PLAYERS);

        // Players -> 5 names -> Category
        for _ in 0..=MAX_PLAYERS {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.setup.focus, SetupField::Category);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.setup.category_label(), "Animais");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.setup.category_label(), "Frutas");
    }

    #[test]
    fn setup_edits_names() {
        let mut app = app(None);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.setup.focus, SetupField::Name(1));
        for c in "Bia".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.setup.names[1], "Bi");
    }

    #[test]
    fn enter_starts_game_with_selected_category() {
        let mut app = app(Some("Frutas"));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::Playing);
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.round().unwrap().secret().as_str(), "UVA");
        assert_eq!(game.session().players()[0].name, "Ana");
        assert_eq!(game.session().players()[1].name, "Player 2");
    }

    #[test]
    fn digits_trigger_actions_and_letters_guess() {
        let mut app = app(Some("Animais"));
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('x'));
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.round().unwrap().hints_used(), 1);
        assert_eq!(game.round().unwrap().wrong_guesses(), 1);
        assert_eq!(game.session().current_player(), 1);

        press(&mut app, KeyCode::Char('2'));
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.round().unwrap().wrong_guesses(), 0);
        assert_eq!(game.session().current_player(), 0);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.game.as_ref().unwrap().session().current_player(), 1);
    }

    #[test]
    fn modal_appears_after_round_and_enter_moves_on() {
        let mut app = app(Some("Frutas"));
        press(&mut app, KeyCode::Enter);
        for c in ['u', 'v', 'a'] {
            press(&mut app, KeyCode::Char(c));
        }

        app.tick(Instant::now());
        let game = app.game.as_ref().unwrap();
        assert!(matches!(game.presenter().modal(), Some(RoundEnding::Won { .. })));

        // letters are swallowed while the notice is up
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Enter);
        let game = app.game.as_ref().unwrap();
        assert!(game.presenter().modal().is_none());
        assert!(game.session().is_active());
    }

    #[test]
    fn empty_category_keeps_setup_screen() {
        let pool = gato_pool();
        let mut setup = SetupState::new(&pool, 1, &[], None);
        setup.categories.push("Vazio".into());
        setup.category = Some(2);
        let mut app = App::new(pool, GameConfig::default(), setup, None);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Setup);
        assert!(app.setup.error.is_some());
    }

    #[test]
    fn esc_quits() {
        let mut app = app(None);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn presenter_waits_for_delay() {
        let mut presenter = TuiPresenter::new(Duration::from_secs(3600));
        presenter.round_over(&RoundEnding::Lost {
            word: "GATO".into(),
            translation: "Cat".into(),
        });

        presenter.tick(Instant::now());
        assert!(presenter.modal().is_none());
        presenter.tick(Instant::now() + Duration::from_secs(7200));
        assert!(presenter.modal().is_some());

        presenter.dismiss();
        assert!(presenter.modal().is_none());
    }

    #[test]
    fn message_log_is_capped() {
        let mut presenter = TuiPresenter::default();
        for i in 0..8 {
            presenter.add_message(format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(presenter.messages().len(), MAX_MESSAGES);
        assert_eq!(presenter.messages()[0].text, "m3");
    }
}
