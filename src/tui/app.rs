//! Countdown application state.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::core::Clock;
use crate::timer::{FocusSession, FocusTimer, Phase, SessionRecorder, TimerEvent};

use super::CountdownOutcome;

/// State for one countdown run: the timer, the recorder, and the
/// warnings and final session gathered along the way.
pub struct CountdownApp<'t, 'r, 's, C> {
    timer: &'t mut FocusTimer<C>,
    recorder: &'r mut SessionRecorder<'s>,
    warnings: Vec<String>,
    last_session: Option<FocusSession>,
    last_tick: Instant,
    should_quit: bool,
}

impl<'t, 'r, 's, C: Clock> CountdownApp<'t, 'r, 's, C> {
    /// Wrap a started timer and its recorder.
    pub fn new(timer: &'t mut FocusTimer<C>, recorder: &'r mut SessionRecorder<'s>) -> Self {
        Self {
            timer,
            recorder,
            warnings: Vec::new(),
            last_session: None,
            last_tick: Instant::now(),
            should_quit: false,
        }
    }

    /// Whether the countdown loop should exit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The timer being displayed.
    #[must_use]
    pub const fn timer(&self) -> &FocusTimer<C> {
        self.timer
    }

    /// Number of warnings collected so far.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Consume the app, yielding the final session and warnings.
    #[must_use]
    pub fn into_outcome(self) -> CountdownOutcome {
        CountdownOutcome {
            session: self.last_session,
            warnings: self.warnings,
        }
    }

    fn apply(&mut self, event: TimerEvent) {
        match &event {
            TimerEvent::SessionCompleted(session) | TimerEvent::SessionInterrupted(session) => {
                self.last_session = Some(session.clone());
            }
            TimerEvent::SessionStarted(_) | TimerEvent::BreakFinished => {}
        }

        if let Err(e) = self.recorder.record(&event) {
            self.warnings.push(format!("session not recorded: {e}"));
        }
    }

    /// Advance the countdown by one logical second.
    pub fn advance_second(&mut self) {
        if let Some(event) = self.timer.tick() {
            self.apply(event);
        }
        if self.timer.phase() == Phase::Idle {
            self.should_quit = true;
        }
    }

    /// Advance the countdown by however many whole seconds have elapsed
    /// since the last call. While paused (or idle) no time accumulates.
    pub fn on_tick(&mut self) {
        if !self.timer.phase().is_counting() {
            self.last_tick = Instant::now();
            if self.timer.phase() == Phase::Idle {
                self.should_quit = true;
            }
            return;
        }

        while self.last_tick.elapsed() >= Duration::from_secs(1) {
            self.last_tick += Duration::from_secs(1);
            self.advance_second();
            if self.should_quit {
                break;
            }
        }
    }

    /// Handle a key press.
    pub fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') => match self.timer.phase() {
                Phase::Running => {
                    let _ = self.timer.pause();
                }
                Phase::Paused => {
                    let _ = self.timer.resume();
                }
                Phase::Idle | Phase::Break => {}
            },
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.timer.phase() != Phase::Idle {
                    match self.timer.cancel() {
                        Ok(event) => self.apply(event),
                        Err(e) => self.warnings.push(e.to_string()),
                    }
                }
                self.should_quit = true;
            }
            _ => {}
        }
    }
}
