pub mod allocated_cost_dto;
pub mod allocation_diagnostics_dto;
pub mod allocation_report_dto;
pub mod job_run_entity;
pub mod price_record_entity;
pub mod task_run_entity;
pub mod usage_record_entity;

pub use allocated_cost_dto::{AllocatedCost, AllocationTotals, JobRunCostSummary};
pub use allocation_diagnostics_dto::{AllocationDiagnostics, SkippedRecord, UsageIssue, UsageIssueKind};
pub use allocation_report_dto::AllocationReport;
pub use job_run_entity::{JobRun, JobRunKey};
pub use price_record_entity::PriceRecord;
pub use task_run_entity::{ResultState, TaskRun};
pub use usage_record_entity::UsageRecord;
