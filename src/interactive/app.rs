//! TUI application state and logic

use crate::commands::Game;
use crate::daily::{self, Resumption};
use crate::output::formatters::{score, share_grid};
use crate::pace::PaceSetter;
use crate::session::{InvalidOperation, Outcome, PuzzleSession, SessionEvent, SubmitError};
use crate::stats::Statistics;
use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

/// How often the countdown is refreshed when no key is pressed
const TICK: Duration = Duration::from_millis(250);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub game: Game,
    pub session: PuzzleSession,
    pub stats: Statistics,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Clock reading of the last tick
    pub now: DateTime<Utc>,
    events: mpsc::Receiver<SessionEvent>,
    announced_ready: bool,
}

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

impl App {
    /// Pick up today's puzzle and the saved statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the saved files cannot be read.
    pub fn new(game: Game, now: DateTime<Utc>) -> Result<Self> {
        let stored = game.store.load_state()?;
        let stats = game.store.load_stats()?;
        let daily = daily::resume_or_start(stored.as_ref(), &game.engine, &game.pace, now);

        let mut session = daily.session;
        let events = attach(&mut session);
        let announced_ready = game.engine.ready();

        let mut app = Self {
            game,
            session,
            stats,
            messages: Vec::new(),
            should_quit: false,
            now,
            events,
            announced_ready,
        };

        match daily.resumption {
            Resumption::Resumed => app.add_message("Welcome back!", MessageStyle::Info),
            Resumption::Started | Resumption::Expired => {
                app.add_message("Guess the word in six tries.", MessageStyle::Info);
            }
            Resumption::Discarded(err) => app.add_message(
                &format!("Saved puzzle was unreadable ({err}), starting over."),
                MessageStyle::Error,
            ),
        }
        if app.game.hard_mode {
            app.add_message("Hard mode is on.", MessageStyle::Info);
        }

        app.persist();
        app.tally_if_needed();
        app.drain_events();
        Ok(app)
    }

    /// Time left in the current period
    #[must_use]
    pub fn remaining(&self) -> TimeDelta {
        self.game.pace.remaining_ttl(self.now)
    }

    /// Share grid once the puzzle is completed
    #[must_use]
    pub fn share(&self) -> Option<String> {
        share_grid(&self.session, &self.game.title)
    }

    /// Advance the clock; starts a new puzzle once the period is over
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.now = now;

        if !self.announced_ready && self.game.engine.ready() {
            self.announced_ready = true;
            tracing::debug!("word list ready");
            self.add_message("Word list loaded.", MessageStyle::Info);
        }

        if !daily::session_is_current(&self.session, &self.game.pace, now) {
            tracing::info!("period rolled over");
            self.session = daily::start(&self.game.engine, &self.game.pace, now);
            self.events = attach(&mut self.session);
            self.persist();
            self.add_message("A new puzzle is here!", MessageStyle::Success);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                if let Err(err) = self.session.insert_letter(c) {
                    self.report_invalid(err);
                }
            }
            KeyCode::Backspace => {
                if let Err(err) = self.session.delete_letter() {
                    self.report_invalid(err);
                }
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
        self.drain_events();
    }

    fn submit(&mut self) {
        match self.session.submit_active(&self.game.engine, self.game.hard_mode) {
            Ok(_) => {}
            Err(SubmitError::Rejected(reason)) => {
                let style = if reason.is_transient() {
                    MessageStyle::Info
                } else {
                    MessageStyle::Error
                };
                self.add_message(&reason.to_string(), style);
            }
            Err(SubmitError::Invalid(err)) => self.report_invalid(err),
        }
    }

    fn report_invalid(&mut self, err: InvalidOperation) {
        if err == InvalidOperation::AlreadyCompleted {
            self.add_message("Come back for the next puzzle!", MessageStyle::Info);
        } else {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    /// React to the session's notifications
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                SessionEvent::TargetAssigned(_)
                | SessionEvent::RowEdited { .. }
                | SessionEvent::RowSubmitted { .. } => self.persist(),
                SessionEvent::Completed(outcome) => {
                    let text = match outcome {
                        Outcome::Won { .. } => format!("Solved! {}", score(outcome)),
                        Outcome::Exhausted => format!(
                            "The word was {}",
                            self.session.target().map(|t| t.word.text()).unwrap_or_default()
                        ),
                    };
                    let style = match outcome {
                        Outcome::Won { .. } => MessageStyle::Success,
                        Outcome::Exhausted => MessageStyle::Error,
                    };
                    self.add_message(&text, style);
                    self.tally_if_needed();
                }
                SessionEvent::Tallied(_) => {
                    if let Err(err) = self.game.store.save_stats(&self.stats) {
                        tracing::warn!(error = %err, "failed to save statistics");
                        self.add_message("Could not save statistics", MessageStyle::Error);
                    }
                    self.persist();
                }
            }
        }
    }

    fn tally_if_needed(&mut self) {
        if self.session.is_completed()
            && !self.session.is_tallied()
            && let Err(err) = self.session.tally(&mut self.stats, &self.game.pace)
        {
            tracing::warn!(error = %err, "tally failed");
        }
    }

    fn persist(&mut self) {
        let Some(state) = self.session.snapshot() else {
            return;
        };
        if let Err(err) = self.game.store.save_state(&state) {
            tracing::warn!(error = %err, "failed to save puzzle");
            self.add_message("Could not save progress", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Forward the session's events into a channel the app reads after each key
fn attach(session: &mut PuzzleSession) -> mpsc::Receiver<SessionEvent> {
    let (tx, rx) = mpsc::channel();
    session.subscribe(move |event| {
        let _ = tx.send(event.clone());
    });
    rx
}

/// Run the TUI application
///
/// The guess index is built on a background thread; guesses submitted before
/// it is ready are refused with a "still loading" message.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    let engine = Arc::clone(&app.game.engine);
    thread::spawn(move || {
        engine.load();
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(grid)) => println!("{grid}"),
        Ok(None) => {}
        Err(err) => {
            tracing::error!(error = %err, "terminal board failed");
            eprintln!("Error: {err}");
        }
    }

    Ok(())
}

/// Event loop; returns the share grid if the puzzle was completed
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
        app.tick(Utc::now());

        if app.should_quit {
            break;
        }
    }

    Ok(app.share())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, PaceConfig};
    use crate::engine::RejectionReason;

    fn game(dir: &std::path::Path) -> Game {
        Game::from_config(&GameConfig {
            start: "2022-03-22T00:00:00Z".parse().unwrap(),
            pace: PaceConfig::Bucket { seconds: 600 },
            state_dir: Some(dir.to_path_buf()),
            ..GameConfig::default()
        })
        .unwrap()
    }

    fn t0() -> DateTime<Utc> {
        "2022-03-22T00:00:05Z".parse().unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn typing_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(game(dir.path()), t0()).unwrap();
        app.handle_key(key(KeyCode::Char('c')));
        app.handle_key(key(KeyCode::Char('r')));
        app.handle_key(key(KeyCode::Backspace));

        let saved = app.game.store.load_state().unwrap().unwrap();
        assert_eq!(saved.rows[0].input, "C");
        assert!(!app.should_quit);
    }

    #[test]
    fn guess_before_loading_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(game(dir.path()), t0()).unwrap();
        type_word(&mut app, "crane");

        assert_eq!(app.session.submitted_rows(), 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Info);
        assert_eq!(last.text, RejectionReason::StillLoading.to_string());
    }

    #[test]
    fn solving_tallies_once_and_saves_statistics() {
        let dir = tempfile::tempdir().unwrap();
        let game = game(dir.path());
        game.engine.load();
        let mut app = App::new(game, t0()).unwrap();

        let answer = app.session.target().unwrap().word.text();
        type_word(&mut app, &answer);

        assert!(app.session.is_tallied());
        assert_eq!(app.stats.played, 1);
        assert_eq!(app.stats.won, 1);
        assert_eq!(app.game.store.load_stats().unwrap(), app.stats);
        assert!(app.share().unwrap().ends_with("🟩🟩🟩🟩🟩"));

        type_word(&mut app, "crane");
        assert_eq!(app.stats.played, 1);
        assert_eq!(app.messages.last().unwrap().text, "Come back for the next puzzle!");

        // Reopening the same period must not count the puzzle again
        let reopened = App::new(app.game.clone(), t0() + TimeDelta::seconds(30)).unwrap();
        assert_eq!(reopened.stats.played, 1);
        assert!(reopened.session.is_tallied());
    }

    #[test]
    fn rollover_starts_new_puzzle() {
        let dir = tempfile::tempdir().unwrap();
        let game = game(dir.path());
        game.engine.load();
        let mut app = App::new(game, t0()).unwrap();
        type_word(&mut app, "zzzzz");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        let day = app.session.target().unwrap().day;
        app.tick(t0() + TimeDelta::seconds(600));
        assert_eq!(app.session.target().unwrap().day, day + 1);
        assert_eq!(app.session.submitted_rows(), 0);
        assert_eq!(app.remaining(), TimeDelta::seconds(595));
    }

    #[test]
    fn late_start_rolls_over_at_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let game = game(dir.path());
        game.engine.load();
        let late = t0() + TimeDelta::seconds(590);
        let mut app = App::new(game, late).unwrap();
        let day = app.session.target().unwrap().day;

        app.tick(late + TimeDelta::seconds(4));
        assert_eq!(app.session.target().unwrap().day, day);

        app.tick(late + TimeDelta::seconds(6));
        let target = app.session.target().unwrap();
        assert_eq!(target.day, day + 1);
        assert_eq!(&target.word, app.game.engine.answer(day + 1));
        assert_eq!(app.remaining(), TimeDelta::seconds(599));
    }

    #[test]
    fn rejected_guess_is_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let game = game(dir.path());
        game.engine.load();
        let mut app = App::new(game, t0()).unwrap();
        type_word(&mut app, "cra");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, RejectionReason::TooShort.to_string());
    }

    #[test]
    fn announces_word_list_once_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(game(dir.path()), t0()).unwrap();
        let before = app.messages.len();

        app.tick(t0() + TimeDelta::seconds(1));
        assert_eq!(app.messages.len(), before);

        app.game.engine.load();
        app.tick(t0() + TimeDelta::seconds(2));
        app.tick(t0() + TimeDelta::seconds(3));
        let loaded: Vec<&Message> = app
            .messages
            .iter()
            .filter(|m| m.text == "Word list loaded.")
            .collect();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(game(dir.path()), t0()).unwrap();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = App::new(app.game.clone(), t0()).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn message_history_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(game(dir.path()), t0()).unwrap();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
