use serde::{Deserialize, Serialize};

use crate::domain::common::model::AnalysisWindow;
use super::allocated_cost_dto::{AllocatedCost, AllocationTotals, JobRunCostSummary};
use super::allocation_diagnostics_dto::AllocationDiagnostics;

/// Full result of one allocation run. Contains no run metadata, so equal
/// inputs always yield equal reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AllocationReport {
    pub window: Option<AnalysisWindow>,
    pub allocations: Vec<AllocatedCost>,
    pub job_runs: Vec<JobRunCostSummary>,
    pub totals: AllocationTotals,
    pub diagnostics: AllocationDiagnostics,
}

impl AllocationReport {
    pub fn job_run(&self, job_id: &str, job_run_id: &str) -> Option<&JobRunCostSummary> {
        self.job_runs
            .iter()
            .find(|s| s.job_id == job_id && s.job_run_id == job_run_id)
    }

    pub fn task(&self, job_id: &str, job_run_id: &str, task_key: &str) -> Option<&AllocatedCost> {
        self.allocations.iter().find(|a| {
            a.job_id == job_id && a.job_run_id == job_run_id && a.task_key == task_key
        })
    }
}
