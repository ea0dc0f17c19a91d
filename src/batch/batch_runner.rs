use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::batch::analysis_batch_dto::{AnalysisBatch, AnalysisOutput};
use crate::core::config::AppConfig;
use crate::domain::allocation::allocate_with_options;
use crate::domain::recommendation::dto::UtilizationSummary;
use crate::domain::recommendation::{recommend_all, summarize_utilization, RecommendationFailure};

pub fn load_batch(path: &Path) -> Result<AnalysisBatch> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse batch file {}", path.display()))
}

/// Runs the allocator and the recommender over one batch.
///
/// Allocation errors abort the batch (under the abort policy); recommender
/// errors are reported per job inside the output.
pub fn run_batch(batch: &AnalysisBatch, config: &AppConfig) -> Result<AnalysisOutput> {
    let run_id = Uuid::new_v4();
    info!(
        %run_id,
        task_runs = batch.task_runs.len(),
        usage_records = batch.usage_records.len(),
        summaries = batch.utilization_summaries.len(),
        "Starting analysis batch"
    );

    let mut options = config.allocation_options();
    options.products = batch.products.clone();

    let allocation = allocate_with_options(
        &batch.task_runs,
        &batch.job_runs,
        &batch.usage_records,
        &batch.price_records,
        &options,
    )
    .context("cost allocation failed")?;

    let mut summaries: Vec<UtilizationSummary> = batch.utilization_summaries.clone();
    let mut unsummarized = Vec::new();
    for job in &batch.utilization_samples {
        match summarize_utilization(&job.job_id, job.current.as_ref(), &job.samples) {
            Some(summary) => summaries.push(UtilizationSummary {
                job_name: job.job_name.clone(),
                ..summary
            }),
            None => {
                warn!(job_id = %job.job_id, "No utilization samples for job");
                unsummarized.push(RecommendationFailure {
                    job_id: job.job_id.clone(),
                    reason: "no utilization samples".into(),
                });
            }
        }
    }

    let mut recommendations = recommend_all(&summaries, config.safety_margin_pct);
    recommendations.failures.extend(unsummarized);

    Ok(AnalysisOutput {
        run_id,
        generated_at: Utc::now(),
        allocation,
        recommendations,
    })
}
