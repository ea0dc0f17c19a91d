use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Which kind of input record a structural error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    TaskRun,
    JobRun,
    UsageRecord,
    PriceRecord,
    AnalysisWindow,
}

impl RecordKind {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::TaskRun => "task_run",
            Self::JobRun => "job_run",
            Self::UsageRecord => "usage_record",
            Self::PriceRecord => "price_record",
            Self::AnalysisWindow => "analysis_window",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Structural input errors raised by the allocator.
///
/// Missing prices and orphaned usage are never errors; they surface in the
/// report diagnostics instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AllocationError {
    #[error("Invalid interval on {kind} {key}: end {end} is before start {start}")]
    InvalidInterval {
        kind: RecordKind,
        key: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid usage record {key}: {reason}")]
    InvalidUsage { key: String, reason: String },

    #[error("Invalid price record {key}: {reason}")]
    InvalidPrice { key: String, reason: String },

    /// Raised before any record is read; never skipped.
    #[error("Invalid analysis window {key}: {reason}")]
    InvalidWindow { key: String, reason: String },
}

impl AllocationError {
    pub fn kind(&self) -> RecordKind {
        match self {
            AllocationError::InvalidInterval { kind, .. } => *kind,
            AllocationError::InvalidUsage { .. } => RecordKind::UsageRecord,
            AllocationError::InvalidPrice { .. } => RecordKind::PriceRecord,
            AllocationError::InvalidWindow { .. } => RecordKind::AnalysisWindow,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            AllocationError::InvalidInterval { key, .. } => key,
            AllocationError::InvalidUsage { key, .. }
            | AllocationError::InvalidPrice { key, .. }
            | AllocationError::InvalidWindow { key, .. } => key,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecommendationError {
    #[error("Invalid utilization input for job {job_id}: {reason}")]
    InvalidInput { job_id: String, reason: String },
}

/// Helper for building an `InvalidInput` from anything printable.
pub fn invalid_input<E: ToString>(job_id: &str, err: E) -> RecommendationError {
    RecommendationError::InvalidInput {
        job_id: job_id.to_string(),
        reason: err.to_string(),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidVar { var: String, reason: String },

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
