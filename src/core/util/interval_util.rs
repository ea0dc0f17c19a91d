use chrono::{DateTime, Duration, NaiveDate, Utc};

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Half-open UTC interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The 24-hour window a daily usage observation applies to.
    pub fn day_window(date: NaiveDate) -> Self {
        let start = date.and_time(chrono::NaiveTime::MIN).and_utc();
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.end >= self.start
    }

    pub fn duration_seconds(&self) -> f64 {
        seconds_between(self.start, self.end).max(0.0)
    }
}

/// Seconds from `start` to `end`, millisecond precision, negative if reversed.
#[inline]
pub fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    end.signed_duration_since(start).num_milliseconds() as f64 / 1000.0
}

/// Length of the intersection of two intervals in seconds; 0 when disjoint.
#[inline]
pub fn overlap_seconds(a: &Interval, b: &Interval) -> f64 {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    seconds_between(start, end).max(0.0)
}
