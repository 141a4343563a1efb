//! # question-bank
//!
//! A terminal browser for quiz-style questions served as JSON.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use question_bank::{AppError, Browser, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::parse_from(["question-bank", "--endpoint", "https://example.com/questions"]);
//!
//!     // Fetch the questions and browse them until the user quits
//!     Browser::new(config).run().await
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod filter;
pub mod logging;
mod models;
pub mod render;
pub mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{info, warn};
use thiserror::Error;
use tokio::sync::oneshot::{self, error::TryRecvError};

pub use app::App;
pub use config::Config;
pub use data::{load, parse_questions, LoadError, QuestionSource, QuestionStore};
pub use filter::{Choice, FilterSelection};
pub use models::{AppState, Question, QuestionId, QuestionRecord, PLACEHOLDER_TEXT};
pub use render::Screen;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for browser operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The log file could not be set up.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

type PendingLoad = oneshot::Receiver<Result<QuestionStore, LoadError>>;

/// A browsing session that can be run in the terminal.
pub struct Browser {
    config: Config,
    app: App,
}

impl Browser {
    pub fn new(config: Config) -> Self {
        if !config.typeset_math() {
            info!("Math typesetting disabled");
        }
        let app = App::new(render::typesetter(config.typeset_math()));
        Self { config, app }
    }

    /// Start loading the questions, then take over the terminal until the
    /// user quits.
    ///
    /// The load runs on its own task so the loading screen stays responsive.
    pub async fn run(mut self) -> Result<(), AppError> {
        let source = self.config.source();
        let timeout = self.config.timeout();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(data::load(&source, timeout).await);
        });

        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, rx);
        terminal::restore()?;
        result
    }
}

fn run_event_loop(
    terminal: &mut terminal::BrowserTerminal,
    app: &mut App,
    rx: PendingLoad,
) -> Result<(), AppError> {
    let mut pending = Some(rx);

    loop {
        if let Some(rx) = pending.as_mut() {
            if let Some(result) = poll_load(rx) {
                app.finish_load(result);
                pending = None;
            }
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_input(app, key.code) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// `None` while the load is still running.
fn poll_load(rx: &mut PendingLoad) -> Option<Result<QuestionStore, LoadError>> {
    match rx.try_recv() {
        Ok(result) => Some(result),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Closed) => {
            warn!("Loader task ended without a result");
            Some(Err(LoadError::Fetch(
                "Loading stopped before it completed".to_string(),
            )))
        }
    }
}

/// Returns true if the browser should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Loading | AppState::LoadFailed { .. } => is_quit(key),
        AppState::Loaded => handle_loaded_input(app, key),
    }
}

fn is_quit(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

fn handle_loaded_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('c') => app.next_category(),
        KeyCode::Char('C') => app.previous_category(),
        KeyCode::Char('d') => app.next_difficulty(),
        KeyCode::Char('D') => app.previous_difficulty(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_card(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_card(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected_answer(),
        _ => return is_quit(key),
    }
    false
}
