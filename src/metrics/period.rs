//! Reporting periods.

use chrono::{DateTime, Duration, Utc};

/// A half-open reporting window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    /// The calendar day containing `now`.
    #[must_use]
    pub fn today(now: DateTime<Utc>) -> Self {
        let start = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map_or(now, |dt| dt.and_utc());
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    /// The `days` calendar days ending with (and including) today.
    #[must_use]
    pub fn last_days(now: DateTime<Utc>, days: i64) -> Self {
        let today = Self::today(now);
        Self {
            start: today.end - Duration::days(days),
            end: today.end,
        }
    }

    /// The window of the same length immediately before this one.
    #[must_use]
    pub fn previous(&self) -> Self {
        let len = self.end - self.start;
        Self {
            start: self.start - len,
            end: self.start,
        }
    }

    /// Whether `ts` falls inside the window.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && ts < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_today_spans_one_day() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 14, 30, 0).unwrap();
        let period = Period::today(now);

        assert_eq!(period.start, Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap());
        assert_eq!(period.end, Utc.with_ymd_and_hms(2025, 6, 16, 0, 0, 0).unwrap());
        assert!(period.contains(now));
    }

    #[test]
    fn test_last_days_includes_today() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 14, 30, 0).unwrap();
        let period = Period::last_days(now, 7);

        assert!(period.contains(now));
        assert!(period.contains(Utc.with_ymd_and_hms(2025, 6, 9, 0, 0, 0).unwrap()));
        assert!(!period.contains(Utc.with_ymd_and_hms(2025, 6, 8, 23, 59, 59).unwrap()));
    }

    #[test]
    fn test_previous_is_adjacent_and_same_length() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 14, 30, 0).unwrap();
        let period = Period::last_days(now, 7);
        let previous = period.previous();

        assert_eq!(previous.end, period.start);
        assert_eq!(previous.end - previous.start, period.end - period.start);
    }

    #[test]
    fn test_contains_is_half_open() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 14, 30, 0).unwrap();
        let period = Period::today(now);

        assert!(period.contains(period.start));
        assert!(!period.contains(period.end));
    }
}
