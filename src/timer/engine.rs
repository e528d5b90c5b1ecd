//! The countdown state machine.
//!
//! [`FocusTimer`] owns the transient timer state for one UI surface.
//! It is caller-constructed (no singletons) and purely local: every
//! operation validates before mutating, so a returned error means the
//! timer is exactly as it was. Side effects are communicated through
//! [`TimerEvent`]s, which the caller hands to a
//! [`super::SessionRecorder`].

use crate::core::Clock;
use crate::error::FocalError;

use super::phase::Phase;
use super::session::FocusSession;

/// A state change that an external collaborator may want to act on.
#[derive(Debug, Clone)]
pub enum TimerEvent {
    /// A work session was created and the countdown started.
    SessionStarted(FocusSession),
    /// The work countdown reached zero; the session is final.
    SessionCompleted(FocusSession),
    /// The session was cancelled; the session is final.
    SessionInterrupted(FocusSession),
    /// The break countdown finished or was cancelled. Nothing to persist.
    BreakFinished,
}

/// Longest accepted work or break phase, in minutes. Keeps the
/// second counts far from `u32` overflow.
pub const MAX_PHASE_MINUTES: u32 = 24 * 60;

/// A Pomodoro-style countdown timer with paired breaks.
#[derive(Debug)]
pub struct FocusTimer<C> {
    clock: C,
    phase: Phase,
    seconds_remaining: u32,
    total_seconds: u32,
    session: Option<FocusSession>,
}

impl<C: Clock> FocusTimer<C> {
    /// Create an idle timer using the given clock.
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            phase: Phase::Idle,
            seconds_remaining: 0,
            total_seconds: 0,
            session: None,
        }
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current countdown.
    pub const fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Full length of the current countdown in seconds.
    pub const fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// The session owned by this timer, if any.
    ///
    /// During a break this is the already-completed work session; it is
    /// cleared when the break ends.
    pub const fn active_session(&self) -> Option<&FocusSession> {
        self.session.as_ref()
    }

    /// Progress through the current countdown (0.0 - 1.0).
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        1.0 - (f64::from(self.seconds_remaining) / f64::from(self.total_seconds))
    }

    /// Start a work session.
    ///
    /// # Errors
    ///
    /// Returns [`FocalError::InvalidConfiguration`] if
    /// `duration_minutes` is zero or either duration exceeds
    /// [`MAX_PHASE_MINUTES`], and [`FocalError::InvalidTimerState`] if a
    /// session is already active. All reject before any mutation.
    pub fn start(
        &mut self,
        duration_minutes: u32,
        break_minutes: u32,
        task_id: Option<String>,
    ) -> Result<TimerEvent, FocalError> {
        if duration_minutes == 0 {
            return Err(FocalError::InvalidConfiguration(
                "duration must be at least one minute".to_string(),
            ));
        }
        if duration_minutes > MAX_PHASE_MINUTES || break_minutes > MAX_PHASE_MINUTES {
            return Err(FocalError::InvalidConfiguration(format!(
                "durations are capped at {MAX_PHASE_MINUTES} minutes"
            )));
        }
        if self.phase != Phase::Idle {
            return Err(FocalError::invalid_state("start", self.phase));
        }

        let session = FocusSession::new(
            duration_minutes,
            break_minutes,
            task_id,
            self.clock.now(),
        );

        self.phase = Phase::Running;
        self.total_seconds = duration_minutes * 60;
        self.seconds_remaining = self.total_seconds;
        self.session = Some(session.clone());

        Ok(TimerEvent::SessionStarted(session))
    }

    /// Attach notes to the session owned by this timer, if any.
    pub fn set_notes(&mut self, notes: Option<String>) {
        if let Some(session) = self.session.as_mut() {
            session.notes = notes;
        }
    }

    /// Suspend the work countdown.
    ///
    /// # Errors
    ///
    /// Returns [`FocalError::InvalidTimerState`] unless the timer is
    /// running.
    pub fn pause(&mut self) -> Result<(), FocalError> {
        if self.phase != Phase::Running {
            return Err(FocalError::invalid_state("pause", self.phase));
        }

        self.phase = Phase::Paused;
        if let Some(session) = self.session.as_mut() {
            session.pause_count += 1;
        }
        Ok(())
    }

    /// Resume a paused countdown. Remaining time is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FocalError::InvalidTimerState`] unless the timer is
    /// paused.
    pub fn resume(&mut self) -> Result<(), FocalError> {
        if self.phase != Phase::Paused {
            return Err(FocalError::invalid_state("resume", self.phase));
        }

        self.phase = Phase::Running;
        Ok(())
    }

    /// Cancel the current session or break and return to idle.
    ///
    /// From `Running` or `Paused` the active session is marked
    /// interrupted. From `Break` the work session already completed when
    /// the break began and is left untouched; only the remaining break
    /// time is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`FocalError::InvalidTimerState`] if the timer is idle.
    pub fn cancel(&mut self) -> Result<TimerEvent, FocalError> {
        match self.phase {
            Phase::Running | Phase::Paused => {
                let mut session = self.reset_to_idle();
                if let Some(session) = session.as_mut() {
                    session.interrupt(self.clock.now());
                }
                session
                    .map(TimerEvent::SessionInterrupted)
                    .ok_or_else(|| FocalError::invalid_state("cancel", Phase::Idle))
            }
            Phase::Break => {
                self.reset_to_idle();
                Ok(TimerEvent::BreakFinished)
            }
            Phase::Idle => Err(FocalError::invalid_state("cancel", Phase::Idle)),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Called once per elapsed second while the timer is counting.
    /// A no-op while idle (stray callbacks after cancellation) or
    /// paused. Returns the event to record when a phase ends.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        match self.phase {
            Phase::Idle | Phase::Paused => None,
            Phase::Running => {
                self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
                if self.seconds_remaining > 0 {
                    return None;
                }
                self.finish_work_phase()
            }
            Phase::Break => {
                self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
                if self.seconds_remaining > 0 {
                    return None;
                }
                self.reset_to_idle();
                Some(TimerEvent::BreakFinished)
            }
        }
    }

    /// Work countdown reached zero: finalize the session and either
    /// enter the paired break or go straight back to idle.
    fn finish_work_phase(&mut self) -> Option<TimerEvent> {
        let now = self.clock.now();
        let session = self.session.as_mut()?;
        session.complete(now);
        let completed = session.clone();

        if completed.break_minutes > 0 {
            self.phase = Phase::Break;
            self.total_seconds = completed.break_minutes * 60;
            self.seconds_remaining = self.total_seconds;
        } else {
            self.reset_to_idle();
        }

        Some(TimerEvent::SessionCompleted(completed))
    }

    fn reset_to_idle(&mut self) -> Option<FocusSession> {
        self.phase = Phase::Idle;
        self.seconds_remaining = 0;
        self.total_seconds = 0;
        self.session.take()
    }
}
