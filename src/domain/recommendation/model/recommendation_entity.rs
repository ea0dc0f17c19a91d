use serde::{Deserialize, Serialize};

/// Coarse workload shape inferred from utilization and data-volume signals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkloadType {
    SimpleEtl,
    ComplexAggregation,
    Mixed,
}

impl WorkloadType {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::SimpleEtl => "SIMPLE_ETL",
            Self::ComplexAggregation => "COMPLEX_AGGREGATION",
            Self::Mixed => "MIXED",
        }
    }
}

/// VM family: memory-optimized (E), compute-optimized (F) or general purpose (D).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NodeFamily {
    E,
    F,
    D,
}

impl NodeFamily {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::E => "E",
            Self::F => "F",
            Self::D => "D",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::E => "memory-optimized",
            Self::F => "compute-optimized",
            Self::D => "general-purpose",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UtilizationLevel {
    Low,
    Neutral,
    High,
}

impl UtilizationLevel {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Neutral => "NEUTRAL",
            Self::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ExpectedImprovement {
    pub provisioning_efficiency_improvement_pct: f64,
    pub estimated_cost_reduction_pct: f64,
}

/// Sizing suggestion for one job. The field set is the serialized schema
/// consumed by the reporting and approval layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub job_id: String,
    pub job_name: Option<String>,
    pub workload_type: WorkloadType,
    pub node_family: NodeFamily,
    pub vcpus_per_node: u32,
    /// Family letter plus vCPU tier, e.g. `E8`.
    pub node_size: String,
    pub min_workers: u32,
    pub max_workers: u32,
    pub current_node_type: Option<String>,
    pub current_min_workers: Option<u32>,
    pub current_max_workers: Option<u32>,
    pub safety_margin_pct: f64,
    pub utilization_level: UtilizationLevel,
    /// 0.0 to 1.0, rounded to two decimals.
    pub confidence_score: f64,
    pub rationale: String,
    pub expected_improvement: ExpectedImprovement,
}
