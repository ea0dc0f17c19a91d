//! Shared domain types (analysis window).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Half-open calendar range `[start_date, end_date)` that one analysis run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_window_order"))]
pub struct AnalysisWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl AnalysisWindow {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self { start_date, end_date }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date < self.end_date
    }

    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

fn validate_window_order(window: &AnalysisWindow) -> Result<(), ValidationError> {
    if window.end_date <= window.start_date {
        let mut err = ValidationError::new("window_order");
        err.message = Some("end_date must be after start_date".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn contains_is_half_open() {
        let w = AnalysisWindow::new(d(2024, 1, 1), d(2024, 2, 1));
        assert!(w.contains(d(2024, 1, 1)));
        assert!(w.contains(d(2024, 1, 31)));
        assert!(!w.contains(d(2024, 2, 1)));
        assert!(!w.contains(d(2023, 12, 31)));
        assert_eq!(w.days(), 31);
    }

    #[test]
    fn reversed_window_fails_validation() {
        assert!(AnalysisWindow::new(d(2024, 1, 1), d(2024, 2, 1)).validate().is_ok());
        assert!(AnalysisWindow::new(d(2024, 2, 1), d(2024, 2, 1)).validate().is_err());
    }
}
