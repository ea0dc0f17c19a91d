use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::util::interval_util::Interval;
use super::job_run_entity::JobRunKey;

/// One coarse billing observation. The exact sub-day timing is unknown, so
/// the record is treated as spread over its whole observation day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageRecord {
    pub job_id: String,
    pub job_run_id: String,
    #[serde(default)]
    pub cluster_id: Option<String>,
    /// Billing category tag (e.g. JOBS, ALL_PURPOSE).
    pub product: String,
    /// Consumption units (DBUs).
    pub quantity: f64,
    pub observation_date: NaiveDate,
    pub sku_name: String,
}

impl UsageRecord {
    pub fn key(&self) -> JobRunKey {
        JobRunKey::new(&self.job_id, &self.job_run_id)
    }

    pub fn day_window(&self) -> Interval {
        Interval::day_window(self.observation_date)
    }

    pub fn record_key(&self) -> String {
        format!(
            "{}/{}/{}@{}",
            self.job_id, self.job_run_id, self.sku_name, self.observation_date
        )
    }
}
