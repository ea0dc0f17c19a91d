//! Batch document in, analysis document out. Used by the binary.

pub mod analysis_batch_dto;
pub mod batch_runner;

pub use analysis_batch_dto::{AnalysisBatch, AnalysisOutput, JobUtilizationSamples};
pub use batch_runner::{load_batch, run_batch};
