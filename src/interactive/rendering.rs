//! TUI rendering with ratatui
//!
//! Setup screen, game board and the round-end notice.

use super::app::{App, MessageStyle, Screen, SetupField, SetupState, TuiPresenter};
use crate::core::{Player, PlayerColor};
use crate::game::{Controller, Round, RoundEnding};
use crate::output::formatters::{
    KEYBOARD_ROWS, KeyState, ending_headline, gallows_art, gallows_stage, hint_line, masked_word,
    progress_bar, reveal_line, trophies,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match (app.screen, app.game.as_ref()) {
        (Screen::Playing, Some(game)) => {
            render_game(f, game, chunks[1]);
            render_game_status(f, game, chunks[2]);
            if let Some(ending) = game.presenter().modal() {
                render_modal(f, ending, f.area());
            }
        }
        _ => {
            render_setup(f, &app.setup, chunks[1]);
            render_setup_status(f, chunks[2]);
        }
    }
}

const fn seat_color(color: PlayerColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN PARTY")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_setup(f: &mut Frame, setup: &SetupState, area: Rect) {
    let focused = |field: SetupField| {
        if setup.focus == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        }
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Players:   "),
            Span::styled(
                format!("◀ {} ▶", setup.player_count),
                focused(SetupField::Players),
            ),
        ]),
        Line::from(""),
    ];

    for seat in 0..setup.player_count {
        let name = &setup.names[seat];
        let shown = if name.is_empty() && setup.focus != SetupField::Name(seat) {
            Player::default_name(seat)
        } else {
            format!("{name}_")
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  ● Seat {}: ", seat + 1),
                Style::default().fg(seat_color(PlayerColor::for_seat(seat))),
            ),
            Span::styled(shown, focused(SetupField::Name(seat))),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Category:  "),
        Span::styled(
            format!("◀ {} ▶", setup.category_label()),
            focused(SetupField::Category),
        ),
    ]));

    if let Some(error) = &setup.error {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" New Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_setup_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("↑/↓: Move | ←/→: Change | Type: Name | Enter: Start | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_game(f: &mut Frame, game: &Controller<TuiPresenter>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Scoreboard and gallows
            Constraint::Percentage(60), // Word, keyboard, hint, messages
        ])
        .split(area);

    let player_rows = u16::try_from(game.session().players().len()).unwrap_or(u16::MAX);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(player_rows.saturating_add(2)),
            Constraint::Min(8),
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Word
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Hint
            Constraint::Min(3),    // Messages
        ])
        .split(columns[1]);

    render_scoreboard(f, game, left[0]);
    render_gallows(f, game, left[1]);

    if let Some(round) = game.round() {
        render_word(f, round, right[0]);
        render_keyboard(f, round, right[1]);
    }
    render_hint(f, game, right[2]);
    render_messages(f, game.presenter(), right[3]);
}

fn render_scoreboard(f: &mut Frame, game: &Controller<TuiPresenter>, area: Rect) {
    let session = game.session();
    let goal = game.config().grand_win_score;

    let items: Vec<ListItem> = session
        .players()
        .iter()
        .enumerate()
        .map(|(seat, player)| {
            let active = seat == session.current_player();
            let mut name_style = Style::default().fg(seat_color(player.color));
            if active {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::raw(if active { "▶ " } else { "  " }),
                Span::styled(format!("{:<12}", player.name), name_style),
                Span::raw(format!("{:>4} ", player.score)),
                Span::styled(progress_bar(player.score, goal, 10), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {}", trophies(player.trophies))),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Scores (first to {goal}) "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_gallows(f: &mut Frame, game: &Controller<TuiPresenter>, area: Rect) {
    let max = game.config().max_wrong_guesses;
    let wrong = game.round().map_or(0, Round::wrong_guesses);
    let lost = matches!(
        game.round().and_then(Round::ending),
        Some(RoundEnding::Lost { .. })
    );

    let lines: Vec<Line> = gallows_art(gallows_stage(wrong, max))
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(if lost { Color::Red } else { Color::White }))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Wrong: {wrong}/{max} "))
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, round: &Round, area: Rect) {
    let content = vec![
        Line::styled(
            masked_word(round.secret(), round.guessed()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Category: {}", round.entry().category()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, round: &Round, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = match KeyState::of(round.secret(), round.guessed(), letter) {
                        KeyState::Unused => Style::default().fg(Color::White),
                        KeyState::Hit => Style::default()
                            .fg(Color::Black)
                            .bg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                        KeyState::Miss => Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_hint(f: &mut Frame, game: &Controller<TuiPresenter>, area: Rect) {
    let text = game.hint_view().map(|view| hint_line(&view)).unwrap_or_default();
    let hint = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Hint ").borders(Borders::ALL));
    f.render_widget(hint, area);
}

fn render_messages(f: &mut Frame, presenter: &TuiPresenter, area: Rect) {
    let messages: Vec<ListItem> = presenter
        .messages()
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_game_status(f: &mut Frame, game: &Controller<TuiPresenter>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let player = game.session().active_player();
    let turn = Paragraph::new(Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(
            player.name.clone(),
            Style::default()
                .fg(seat_color(player.color))
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(turn, chunks[0]);

    let help = Paragraph::new(
        "A-Z: Guess | 1: Hint | 2: Undo | 3: Pass | 4: Next word | 5: New tournament | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_modal(f: &mut Frame, ending: &RoundEnding, area: Rect) {
    let popup = centered_rect(60, 9, area);
    let (title, color) = match ending {
        RoundEnding::Won { .. } => (" 🎉 Round won ", Color::Green),
        RoundEnding::Lost { .. } => (" Round lost ", Color::Red),
        RoundEnding::Champion { .. } => (" ✨ TOURNAMENT OVER ✨ ", Color::Yellow),
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            ending_headline(ending),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::from(reveal_line(ending)),
    ];
    if ending.is_champion() {
        lines.push(Line::styled(
            "All scores have been reset.",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Enter: Next word | 5: New tournament | Esc: Close",
        Style::default().fg(Color::DarkGray),
    ));

    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(modal, popup);
}

/// Rectangle `percent_x` wide and `height` tall, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::wordlists::WordPool;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let pool = WordPool::embedded().filtered("Animais");
        let setup = SetupState::new(&pool, 2, &[], None);
        App::new(pool, GameConfig::default(), setup, Some(11))
    }

    #[test]
    fn setup_screen_lists_seats() {
        let screen = draw(&app());
        assert!(screen.contains("New Game"));
        assert!(screen.contains("Player 1"));
        assert!(screen.contains("Player 2"));
        assert!(screen.contains("All"));
    }

    #[test]
    fn game_screen_shows_board() {
        let mut app = app();
        app.start_game();
        let screen = draw(&app);
        assert!(screen.contains("Scores"));
        assert!(screen.contains("Keyboard"));
        assert!(screen.contains("Category: Animais"));
        assert!(screen.contains("Wrong: 0/9"));
    }
}
