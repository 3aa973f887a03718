//! TUI rendering with ratatui
//!
//! Board of six rows, an on-screen keyboard colored with the best known hint
//! for each letter, recent messages and a status bar with the countdown.

use super::app::{App, MessageStyle};
use crate::core::normalize::fold_letter;
use crate::core::{LetterFeedback, WORD_LENGTH};
use crate::output::formatters::{format_ttl, score};
use crate::session::{MAX_ROWS, Row};
use crate::wordlists::Locale;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board and side panel
            Constraint::Length(3), // Rows used
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_progress(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut title = match app.session.target() {
        Some(target) => format!("{} #{}", app.game.title.to_uppercase(), target.day),
        None => app.game.title.to_uppercase(),
    };
    if !app.game.engine.ready() {
        title.push_str("  (loading words...)");
    }

    let header = Paragraph::new(title)
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

const fn mark_color(mark: LetterFeedback) -> Color {
    match mark {
        LetterFeedback::RightPlace => Color::Green,
        LetterFeedback::WrongPlace => Color::Yellow,
        LetterFeedback::WrongLetter => Color::DarkGray,
    }
}

fn tile_style(mark: LetterFeedback) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(mark_color(mark))
        .add_modifier(Modifier::BOLD)
}

fn row_line(row: &Row, active: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    if let (Some(word), Some(feedback)) = (row.word(), row.feedback()) {
        for (&letter, &mark) in word.letters().iter().zip(feedback.marks()) {
            spans.push(Span::styled(format!(" {letter} "), tile_style(mark)));
            spans.push(Span::raw(" "));
        }
    } else {
        let typed: Vec<char> = row.input().chars().collect();
        for pos in 0..WORD_LENGTH {
            let span = match typed.get(pos) {
                Some(letter) => Span::styled(
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Rgb(58, 58, 60))
                        .add_modifier(Modifier::BOLD),
                ),
                None if active => Span::styled(" _ ", Style::default().fg(Color::Gray)),
                None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let active = app.session.active_row();
    let mut lines = vec![Line::from("")];
    for (i, row) in app.session.rows().iter().enumerate() {
        lines.push(row_line(row, active == Some(i)));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

/// Key rows for a locale
const fn keyboard_rows(locale: Locale) -> [&'static str; 3] {
    match locale {
        Locale::En => ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"],
        Locale::Fr => ["AZERTYUIOP", "QSDFGHJKLM", "WXCVBN"],
    }
}

fn key_span(letter: char, hints: &FxHashMap<char, LetterFeedback>) -> Span<'static> {
    let style = match hints.get(&fold_letter(letter)) {
        Some(&LetterFeedback::WrongLetter) => Style::default().fg(Color::DarkGray),
        Some(&mark) => tile_style(mark),
        None => Style::default().fg(Color::White),
    };
    Span::styled(format!(" {letter} "), style)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.letter_hints();
    let lines: Vec<Line> = keyboard_rows(app.game.engine.lexicon().locale())
        .iter()
        .map(|row| Line::from(row.chars().map(|c| key_span(c, &hints)).collect::<Vec<_>>()))
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
        .messages
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

    if let Some(grid) = app.share() {
        items.insert(0, ListItem::new(""));
        for line in grid.lines().rev() {
            items.insert(0, ListItem::new(line.to_string()));
        }
    }

    let messages_list =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.submitted_rows();
    let (label, color) = match app.session.outcome() {
        Some(outcome) => (
            format!(
                "{} | come back in {}",
                score(outcome),
                format_ttl(app.remaining())
            ),
            Color::Green,
        ),
        None => (format!("{used}/{MAX_ROWS} rows used"), Color::Cyan),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent((used * 100 / MAX_ROWS) as u16)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!(
        "{} | {}",
        app.game.engine.lexicon().locale().display_name(),
        if app.game.hard_mode { "Hard" } else { "Normal" }
    );
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Played: {} | Win: {:.0}% | Streak: {}",
        app.stats.played,
        app.stats.win_rate() * 100.0,
        app.stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let countdown_text = format!("Next puzzle: {}", format_ttl(app.remaining()));
    let countdown = Paragraph::new(countdown_text).alignment(Alignment::Center);
    f.render_widget(countdown, chunks[2]);

    let help_text = if app.session.is_completed() {
        "Esc: Quit"
    } else {
        "Esc: Quit | Enter: Submit | ⌫: Delete"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn keyboards_cover_the_alphabet() {
        for locale in Locale::ALL {
            let mut letters: Vec<char> = keyboard_rows(locale).concat().chars().collect();
            letters.sort_unstable();
            letters.dedup();
            assert_eq!(letters.len(), 26, "{locale}");
        }
    }

    #[test]
    fn keys_use_best_hint() {
        let mut hints = FxHashMap::default();
        hints.insert('E', LetterFeedback::RightPlace);
        hints.insert('Z', LetterFeedback::WrongLetter);

        assert_eq!(key_span('E', &hints).style, tile_style(LetterFeedback::RightPlace));
        assert_eq!(key_span('Z', &hints).style.fg, Some(Color::DarkGray));
        assert_eq!(key_span('Q', &hints).style.fg, Some(Color::White));
    }

    #[test]
    fn submitted_row_shows_colored_tiles() {
        let mut row = Row::new(Word::new("trace").unwrap());
        for c in "crane".chars() {
            row.push(c);
        }
        row.submit(Word::new("crane").unwrap());

        let line = row_line(&row, false);
        let tiles: Vec<&Span> = line.spans.iter().step_by(2).collect();
        assert_eq!(tiles.len(), WORD_LENGTH);
        assert_eq!(tiles[0].content, " C ");
        assert_eq!(tiles[0].style.bg, Some(Color::Yellow));
        assert_eq!(tiles[1].style.bg, Some(Color::Green));
        assert_eq!(tiles[3].style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn open_row_marks_active_cells() {
        let mut row = Row::new(Word::new("trace").unwrap());
        row.push('t');

        let line = row_line(&row, true);
        assert_eq!(line.spans[0].content, " T ");
        assert_eq!(line.spans[2].content, " _ ");

        let idle = row_line(&Row::new(Word::new("trace").unwrap()), false);
        assert_eq!(idle.spans[0].content, " · ");
    }
}
