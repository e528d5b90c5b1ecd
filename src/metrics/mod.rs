//! Derived productivity metrics.
//!
//! Pure, synchronous helpers that turn session and task history into
//! dashboard figures. Nothing here touches storage or the clock; the
//! caller fetches the data and passes "today" in, which keeps every
//! computation deterministic under test.

mod aggregate;
mod dashboard;
mod period;

pub use aggregate::{aggregate, percent_delta, productivity_score, streak_days, PeriodMetrics};
pub use dashboard::{daily_minutes, FocusStats};
pub use period::Period;
