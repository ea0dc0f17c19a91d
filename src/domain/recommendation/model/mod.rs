pub mod recommendation_entity;

pub use recommendation_entity::{
    ExpectedImprovement, NodeFamily, Recommendation, UtilizationLevel, WorkloadType,
};
