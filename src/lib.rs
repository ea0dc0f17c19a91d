//! Per-task cost attribution for multi-task batch jobs and rule-based
//! cluster right-sizing recommendations.

pub mod batch;
pub mod core;
pub mod domain;
pub mod errors;

pub use domain::allocation::{allocate, allocate_with_options, AllocationOptions, InvalidRecordPolicy};
pub use domain::recommendation::{recommend, recommend_all, summarize_utilization};
pub use errors::{AllocationError, ConfigError, RecommendationError};
