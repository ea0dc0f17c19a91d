pub mod cluster_sizing;
pub mod rationale_builder;
pub mod recommendation_service;
pub mod utilization_summarizer;
pub mod workload_classifier;
