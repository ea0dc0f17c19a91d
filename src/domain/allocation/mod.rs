//! Time-overlap allocation of coarse usage cost to the tasks of a job run.

pub mod model;
pub mod service;

pub use service::allocation_options::{AllocationOptions, InvalidRecordPolicy};
pub use service::allocation_service::{allocate, allocate_with_options};
