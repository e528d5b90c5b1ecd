//! Focus timer state machine and session records.
//!
//! The timer is pure local state: operations validate fully before
//! mutating, and persistence happens through [`SessionRecorder`] so a
//! failing store can never corrupt a running countdown.

pub mod engine;
pub mod phase;
pub mod recorder;
pub mod session;

pub use engine::{FocusTimer, TimerEvent, MAX_PHASE_MINUTES};
pub use phase::Phase;
pub use recorder::SessionRecorder;
pub use session::{FocusSession, SessionStatus};
