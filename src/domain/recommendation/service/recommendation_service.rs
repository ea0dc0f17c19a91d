use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use validator::Validate;

use crate::domain::recommendation::dto::UtilizationSummary;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::service::cluster_sizing::{
    confidence_score, expected_improvement, vcpu_tier, worker_bounds,
};
use crate::domain::recommendation::service::rationale_builder::{build_rationale, SizingOutcome};
use crate::domain::recommendation::service::workload_classifier::{
    classify_workload, select_node_family, utilization_level,
};
use crate::errors::{invalid_input, RecommendationError};

pub const DEFAULT_SAFETY_MARGIN_PCT: f64 = 20.0;

/// Maps one job's utilization summary to a sizing recommendation.
pub fn recommend(
    input: &UtilizationSummary,
    safety_margin_pct: f64,
) -> Result<Recommendation, RecommendationError> {
    input.ensure_finite().map_err(|e| invalid_input(&input.job_id, e))?;
    input.validate().map_err(|e| invalid_input(&input.job_id, e))?;
    if !safety_margin_pct.is_finite() || !(0.0..100.0).contains(&safety_margin_pct) {
        return Err(invalid_input(
            &input.job_id,
            format!("safety margin {safety_margin_pct} must be within [0, 100)"),
        ));
    }

    let workload_type = classify_workload(input);
    let selection = select_node_family(input);
    let vcpus_per_node = vcpu_tier(input.avg_cpus_utilized, input.avg_nodes_consumed);
    let (min_workers, max_workers) = worker_bounds(input, safety_margin_pct);
    let improvement = expected_improvement(input.current_max_workers, max_workers);
    let level = utilization_level(input);

    let rationale = build_rationale(
        input,
        &SizingOutcome {
            selection,
            level,
            vcpus_per_node,
            min_workers,
            max_workers,
            safety_margin_pct,
            provisioning_improvement_pct: improvement.provisioning_efficiency_improvement_pct,
        },
    );

    debug!(
        job_id = %input.job_id,
        workload = workload_type.as_code(),
        family = selection.family.as_code(),
        level = level.as_code(),
        min_workers,
        max_workers,
        "Recommendation computed"
    );

    Ok(Recommendation {
        job_id: input.job_id.clone(),
        job_name: input.job_name.clone(),
        workload_type,
        node_family: selection.family,
        vcpus_per_node,
        node_size: format!("{}{}", selection.family.as_code(), vcpus_per_node),
        min_workers,
        max_workers,
        current_node_type: input.current_node_type.clone(),
        current_min_workers: input.current_min_workers,
        current_max_workers: input.current_max_workers,
        safety_margin_pct,
        utilization_level: level,
        confidence_score: confidence_score(input),
        rationale,
        expected_improvement: improvement,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationFailure {
    pub job_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationBatch {
    pub recommendations: Vec<Recommendation>,
    pub failures: Vec<RecommendationFailure>,
}

/// Runs `recommend` per job; a bad summary only fails its own job.
pub fn recommend_all(inputs: &[UtilizationSummary], safety_margin_pct: f64) -> RecommendationBatch {
    let mut batch = RecommendationBatch::default();

    for input in inputs {
        match recommend(input, safety_margin_pct) {
            Ok(rec) => batch.recommendations.push(rec),
            Err(err) => {
                warn!(job_id = %input.job_id, error = %err, "Skipping recommendation");
                batch.failures.push(RecommendationFailure {
                    job_id: input.job_id.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    info!(
        recommended = batch.recommendations.len(),
        failed = batch.failures.len(),
        "Recommendations finished"
    );
    batch
}
