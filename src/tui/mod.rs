//! Interactive countdown screen.
//!
//! Runs the full-screen countdown for a focus session and its break.
//! Built with ratatui and crossterm. The timer advances one logical
//! second at a time, paced by wall-clock accumulation, so a slow redraw
//! never loses ticks.

mod app;
mod ui;

pub use app::CountdownApp;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::core::Clock;
use crate::error::FocalError;
use crate::timer::{FocusSession, FocusTimer, SessionRecorder};

/// What happened during the countdown.
pub struct CountdownOutcome {
    /// The finished session, completed or interrupted. `None` only if
    /// the countdown never ran a session.
    pub session: Option<FocusSession>,
    /// Persistence warnings collected while the countdown ran.
    pub warnings: Vec<String>,
}

/// Run the countdown until the timer returns to idle.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
/// Persistence failures do not abort the countdown; they are returned
/// as warnings in the outcome.
pub fn run<C: Clock>(
    timer: &mut FocusTimer<C>,
    recorder: &mut SessionRecorder<'_>,
) -> Result<CountdownOutcome, FocalError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| FocalError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FocalError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FocalError::Config(format!("Failed to create terminal: {e}")))?;

    let mut app = CountdownApp::new(timer, recorder);
    let result = run_app(&mut terminal, &mut app);
    let outcome = app.into_outcome();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|()| outcome)
}

/// Run the main countdown loop.
fn run_app<B: Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut CountdownApp<'_, '_, '_, C>,
) -> Result<(), FocalError> {
    while !app.should_quit() {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FocalError::Config(format!("Failed to draw: {e}")))?;

        let ready = event::poll(Duration::from_millis(100))
            .map_err(|e| FocalError::Config(format!("Failed to poll events: {e}")))?;
        if ready {
            let ev = event::read()
                .map_err(|e| FocalError::Config(format!("Failed to read event: {e}")))?;
            if let Event::Key(key) = ev {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code);
                }
            }
        }

        app.on_tick();
    }

    Ok(())
}
