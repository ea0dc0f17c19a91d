pub mod run_utilization_sample;
pub mod utilization_summary_request;

pub use run_utilization_sample::{CurrentClusterConfig, RunUtilizationSample};
pub use utilization_summary_request::UtilizationSummary;
