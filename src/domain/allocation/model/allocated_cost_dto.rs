use serde::{Deserialize, Serialize};

/// Cost and consumption attributed to one task of one job run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocatedCost {
    pub workspace_id: String,
    pub job_id: String,
    pub job_run_id: String,
    pub task_key: String,
    pub cluster_id: Option<String>,
    pub allocated_quantity: f64,
    pub allocated_cost_usd: f64,
    /// Usage records that overlapped this task.
    pub usage_records_considered: u32,
    /// Mean count of simultaneously active tasks across those records.
    pub average_concurrent_tasks: f64,
    pub task_duration_seconds: f64,
    pub cost_per_hour_usd: f64,
    pub cost_per_unit_usd: f64,
    pub pct_of_job_cost: f64,
}

/// Per job-run roll-up produced alongside the task allocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobRunCostSummary {
    pub job_id: String,
    pub job_run_id: String,
    pub workspace_id: Option<String>,
    pub task_count: u32,
    pub usage_record_count: u32,
    pub total_quantity: f64,
    pub total_cost_usd: f64,
    pub allocated_quantity: f64,
    pub allocated_cost_usd: f64,
    pub orphaned_cost_usd: f64,
    pub allocation_completeness_pct: f64,
    /// Envelope duration, when a job-run record was supplied.
    pub job_duration_seconds: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AllocationTotals {
    pub job_run_count: u32,
    pub total_cost_usd: f64,
    pub allocated_cost_usd: f64,
    pub orphaned_cost_usd: f64,
    pub total_quantity: f64,
    pub allocated_quantity: f64,
    pub allocation_completeness_pct: f64,
}
