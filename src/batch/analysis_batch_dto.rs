use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::allocation::model::{AllocationReport, JobRun, PriceRecord, TaskRun, UsageRecord};
use crate::domain::recommendation::dto::{CurrentClusterConfig, RunUtilizationSample, UtilizationSummary};
use crate::domain::recommendation::RecommendationBatch;

/// Raw per-run samples for a job that has not been summarized upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobUtilizationSamples {
    pub job_id: String,
    #[serde(default)]
    pub job_name: Option<String>,
    #[serde(default)]
    pub current: Option<CurrentClusterConfig>,
    pub samples: Vec<RunUtilizationSample>,
}

/// Input document handed over by the orchestrator. Every list may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisBatch {
    pub task_runs: Vec<TaskRun>,
    pub job_runs: Vec<JobRun>,
    pub usage_records: Vec<UsageRecord>,
    pub price_records: Vec<PriceRecord>,
    pub utilization_summaries: Vec<UtilizationSummary>,
    pub utilization_samples: Vec<JobUtilizationSamples>,
    /// Restricts allocation to these products.
    pub products: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisOutput {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub allocation: AllocationReport,
    pub recommendations: RecommendationBatch,
}
