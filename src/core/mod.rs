//! Shared primitives used across features.

pub mod clock;
pub mod duration;

pub use clock::{Clock, FixedClock, SystemClock};
pub use duration::{format_duration, format_duration_mmss, format_minutes_short, parse_duration};
