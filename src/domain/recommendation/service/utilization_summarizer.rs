use crate::core::util::stats_util::{mean, percentile};
use crate::domain::recommendation::dto::{CurrentClusterConfig, RunUtilizationSample, UtilizationSummary};

/// Runs needed before a P95 figure is reported.
pub const MIN_SAMPLES_FOR_P95: usize = 5;
/// Runs needed before a P99 figure is reported.
pub const MIN_SAMPLES_FOR_P99: usize = 20;

/// Builds the recommender input for one job from its per-run samples.
///
/// Returns `None` when there are no samples.
pub fn summarize_utilization(
    job_id: &str,
    config: Option<&CurrentClusterConfig>,
    samples: &[RunUtilizationSample],
) -> Option<UtilizationSummary> {
    if samples.is_empty() {
        return None;
    }

    let cpu: Vec<f64> = samples.iter().map(|s| s.cpu_pct).collect();
    let mem: Vec<f64> = samples.iter().map(|s| s.mem_pct).collect();
    let nodes: Vec<f64> = samples.iter().map(|s| s.nodes_consumed).collect();
    let cpus: Vec<f64> = samples.iter().filter_map(|s| s.cpus_utilized).collect();
    let rows: Vec<f64> = samples.iter().filter_map(|s| s.rows_added).map(|r| r as f64).collect();

    let count = samples.len();
    let tail = |values: &[f64], p: f64, min_samples: usize| {
        if count >= min_samples {
            percentile(values, p)
        } else {
            None
        }
    };

    Some(UtilizationSummary {
        job_id: job_id.to_string(),
        job_name: None,
        avg_cpu_pct: mean(&cpu)?,
        avg_mem_pct: mean(&mem)?,
        p95_cpu_pct: tail(&cpu, 95.0, MIN_SAMPLES_FOR_P95),
        p95_mem_pct: tail(&mem, 95.0, MIN_SAMPLES_FOR_P95),
        avg_nodes_consumed: mean(&nodes)?,
        p95_nodes_consumed: tail(&nodes, 95.0, MIN_SAMPLES_FOR_P95),
        p99_nodes_consumed: tail(&nodes, 99.0, MIN_SAMPLES_FOR_P99),
        avg_cpus_utilized: mean(&cpus),
        current_node_type: config.and_then(|c| c.node_type.clone()),
        current_min_workers: config.and_then(|c| c.min_workers),
        current_max_workers: config.and_then(|c| c.max_workers),
        rows_added: mean(&rows).map(|r| r.round() as u64),
        num_tables: samples.iter().filter_map(|s| s.num_tables).max(),
        run_count: Some(count as u32),
    })
}
