use crate::domain::recommendation::dto::UtilizationSummary;
use crate::domain::recommendation::model::ExpectedImprovement;

pub const VCPU_TIERS: [u32; 4] = [2, 4, 8, 16];
pub const DEFAULT_VCPU_TIER: u32 = 4;
pub const MAX_WORKERS_CAP: u32 = 32;
pub const COST_REDUCTION_DAMPING: f64 = 0.8;

const CLARITY_WEIGHT: f64 = 0.7;
const CLEAR_SIGNAL_SCORE: f64 = 0.7;
const UNCLEAR_SIGNAL_SCORE: f64 = 0.5;
const CLEAR_SIGNAL_BELOW_PCT: f64 = 20.0;

/// Ceiling that ignores float noise just above an integer (e.g. 4.000000000000001).
fn ceil_count(value: f64) -> u32 {
    (value - 1e-9).ceil().max(0.0) as u32
}

/// Smallest tier that fits the per-node CPU demand; 16 when nothing fits.
pub fn vcpu_tier(avg_cpus_utilized: Option<f64>, avg_nodes_consumed: f64) -> u32 {
    let cpus = match avg_cpus_utilized {
        Some(c) if c > 0.0 && avg_nodes_consumed > 0.0 => c,
        _ => return DEFAULT_VCPU_TIER,
    };

    let cpus_per_node = ceil_count(cpus / avg_nodes_consumed);
    VCPU_TIERS
        .iter()
        .copied()
        .find(|tier| *tier >= cpus_per_node)
        .unwrap_or(VCPU_TIERS[VCPU_TIERS.len() - 1])
}

/// `(min_workers, max_workers)` around observed node consumption.
pub fn worker_bounds(input: &UtilizationSummary, safety_margin_pct: f64) -> (u32, u32) {
    let margin = safety_margin_pct / 100.0;

    let min_workers = ceil_count(input.avg_nodes_consumed * (1.0 - margin)).max(1);

    let peak = input.p95_nodes_consumed.unwrap_or(input.avg_nodes_consumed);
    let max_workers = ceil_count(peak * (1.0 + margin))
        .max(min_workers)
        .min(MAX_WORKERS_CAP);

    (min_workers, max_workers)
}

/// Pattern clarity (weight 0.7) plus data completeness (weight 0.3), in [0, 1].
pub fn confidence_score(input: &UtilizationSummary) -> f64 {
    let signal = |pct: f64| {
        if pct < CLEAR_SIGNAL_BELOW_PCT {
            CLEAR_SIGNAL_SCORE
        } else {
            UNCLEAR_SIGNAL_SCORE
        }
    };
    let clarity = (signal(input.avg_cpu_pct) + signal(input.avg_mem_pct)) / 2.0 * CLARITY_WEIGHT;

    let completeness = match (input.p95_nodes_consumed, input.p99_nodes_consumed) {
        (Some(_), Some(_)) => 0.3,
        (Some(_), None) => 0.2,
        _ => 0.1,
    };

    round2((clarity + completeness).clamp(0.0, 1.0))
}

pub fn expected_improvement(current_max_workers: Option<u32>, recommended_max_workers: u32) -> ExpectedImprovement {
    let provisioning = match current_max_workers {
        Some(current) if current > 0 => {
            (current as f64 - recommended_max_workers as f64) / current as f64 * 100.0
        }
        _ => 0.0,
    };

    ExpectedImprovement {
        provisioning_efficiency_improvement_pct: provisioning,
        estimated_cost_reduction_pct: provisioning * COST_REDUCTION_DAMPING,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
