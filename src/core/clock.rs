//! Injectable time source.
//!
//! The timer and metrics code never read the wall clock directly; they
//! take a [`Clock`] so tests can drive time deterministically.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// A source of "now".
pub trait Clock {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time. The production clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Used in tests.
#[derive(Debug)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock frozen at the given instant.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Advance the clock by the given number of seconds.
    pub fn advance_secs(&self, seconds: i64) {
        self.now.set(self.now.get() + Duration::seconds(seconds));
    }

    /// Move the clock to an arbitrary instant.
    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
