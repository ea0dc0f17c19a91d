use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AllocationError, RecordKind};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsageIssueKind {
    /// No price record covered the observation date; cost taken as 0.
    Unpriced,
    /// No task was active during the record's day window.
    Orphaned,
}

impl UsageIssueKind {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Unpriced => "UNPRICED",
            Self::Orphaned => "ORPHANED",
        }
    }
}

/// A usage record that was allocated in degraded form, or not at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageIssue {
    pub kind: UsageIssueKind,
    pub job_id: String,
    pub job_run_id: String,
    pub cluster_id: Option<String>,
    pub sku_name: String,
    pub observation_date: NaiveDate,
    pub quantity: f64,
    pub cost_usd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkippedRecord {
    pub kind: String,
    pub key: String,
    pub reason: String,
}

impl From<&AllocationError> for SkippedRecord {
    fn from(err: &AllocationError) -> Self {
        Self {
            kind: err.kind().as_code().to_string(),
            key: err.key().to_string(),
            reason: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AllocationDiagnostics {
    pub usage_issues: Vec<UsageIssue>,
    pub skipped_records: Vec<SkippedRecord>,
    pub incomplete_task_runs: u32,
    pub superseded_task_slices: u32,
    pub out_of_window_records: u32,
    pub filtered_product_records: u32,
}

impl AllocationDiagnostics {
    pub fn count_issues(&self, kind: UsageIssueKind) -> usize {
        self.usage_issues.iter().filter(|i| i.kind == kind).count()
    }

    pub fn orphaned(&self) -> impl Iterator<Item = &UsageIssue> {
        self.usage_issues
            .iter()
            .filter(|i| i.kind == UsageIssueKind::Orphaned)
    }

    pub fn skipped_of(&self, kind: RecordKind) -> usize {
        self.skipped_records
            .iter()
            .filter(|r| r.kind == kind.as_code())
            .count()
    }
}
