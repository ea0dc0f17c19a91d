use serde::{Deserialize, Serialize};

/// Utilization observed for a single job run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RunUtilizationSample {
    pub job_run_id: String,
    pub cpu_pct: f64,
    pub mem_pct: f64,
    pub nodes_consumed: f64,
    #[serde(default)]
    pub cpus_utilized: Option<f64>,
    #[serde(default)]
    pub rows_added: Option<u64>,
    #[serde(default)]
    pub num_tables: Option<u32>,
}

/// Cluster configuration the job currently runs with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrentClusterConfig {
    pub node_type: Option<String>,
    pub min_workers: Option<u32>,
    pub max_workers: Option<u32>,
}
