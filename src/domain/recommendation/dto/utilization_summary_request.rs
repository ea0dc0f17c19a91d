use serde::{Deserialize, Serialize};
use validator::Validate;

/// Per-job utilization statistics for one analysis period.
///
/// Optional figures are `None` when the aggregator had no data; zero is a
/// real observation and is treated as such.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct UtilizationSummary {
    #[validate(length(min = 1))]
    pub job_id: String,
    #[serde(default)]
    pub job_name: Option<String>,

    #[validate(range(min = 0.0))]
    pub avg_cpu_pct: f64,
    #[validate(range(min = 0.0))]
    pub avg_mem_pct: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub p95_cpu_pct: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub p95_mem_pct: Option<f64>,

    #[validate(range(exclusive_min = 0.0))]
    pub avg_nodes_consumed: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub p95_nodes_consumed: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub p99_nodes_consumed: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub avg_cpus_utilized: Option<f64>,

    /// Currently configured node type, e.g. `Standard_D8ds_v5`.
    #[serde(default)]
    pub current_node_type: Option<String>,
    #[serde(default)]
    pub current_min_workers: Option<u32>,
    #[serde(default)]
    pub current_max_workers: Option<u32>,

    /// Rows written per run, when the workload reports it.
    #[serde(default)]
    pub rows_added: Option<u64>,
    #[serde(default)]
    pub num_tables: Option<u32>,
    #[serde(default)]
    pub run_count: Option<u32>,
}

impl UtilizationSummary {
    /// Range checks let NaN through, so non-finite values are rejected here.
    pub fn ensure_finite(&self) -> Result<(), String> {
        let fields = [
            ("avg_cpu_pct", Some(self.avg_cpu_pct)),
            ("avg_mem_pct", Some(self.avg_mem_pct)),
            ("p95_cpu_pct", self.p95_cpu_pct),
            ("p95_mem_pct", self.p95_mem_pct),
            ("avg_nodes_consumed", Some(self.avg_nodes_consumed)),
            ("p95_nodes_consumed", self.p95_nodes_consumed),
            ("p99_nodes_consumed", self.p99_nodes_consumed),
            ("avg_cpus_utilized", self.avg_cpus_utilized),
        ];

        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(format!("{name} must be a finite number, got {v}"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> UtilizationSummary {
        UtilizationSummary {
            job_id: "job-1".into(),
            avg_cpu_pct: 30.0,
            avg_mem_pct: 40.0,
            avg_nodes_consumed: 4.0,
            ..Default::default()
        }
    }

    #[test]
    fn accepts_minimal_summary() {
        assert!(valid().validate().is_ok());
        assert!(valid().ensure_finite().is_ok());
    }

    #[test]
    fn rejects_negative_percentages_and_non_positive_nodes() {
        let negative = UtilizationSummary { avg_cpu_pct: -1.0, ..valid() };
        assert!(negative.validate().is_err());

        let negative_p95 = UtilizationSummary { p95_mem_pct: Some(-0.5), ..valid() };
        assert!(negative_p95.validate().is_err());

        let zero_nodes = UtilizationSummary { avg_nodes_consumed: 0.0, ..valid() };
        assert!(zero_nodes.validate().is_err());
    }

    #[test]
    fn rejects_nan() {
        let nan = UtilizationSummary { avg_mem_pct: f64::NAN, ..valid() };
        let err = nan.ensure_finite().unwrap_err();
        assert!(err.contains("avg_mem_pct"));
    }

    #[test]
    fn absent_optional_fields_deserialize_as_none() {
        let summary: UtilizationSummary = serde_json::from_value(json!({
            "job_id": "job-7",
            "avg_cpu_pct": 0.0,
            "avg_mem_pct": 12.5,
            "avg_nodes_consumed": 2.0
        }))
        .unwrap();

        assert_eq!(summary.avg_cpu_pct, 0.0);
        assert_eq!(summary.p95_nodes_consumed, None);
        assert_eq!(summary.rows_added, None);
    }
}
