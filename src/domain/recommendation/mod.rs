pub mod dto;
pub mod model;
pub mod service;

pub use service::recommendation_service::{
    recommend, recommend_all, RecommendationBatch, RecommendationFailure, DEFAULT_SAFETY_MARGIN_PCT,
};
pub use service::utilization_summarizer::summarize_utilization;
