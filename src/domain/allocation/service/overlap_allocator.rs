use crate::core::util::cost_util::CostUtil;
use crate::core::util::interval_util::overlap_seconds;
use crate::core::util::stats_util::RunningMean;
use crate::domain::allocation::model::{
    AllocatedCost, JobRun, JobRunCostSummary, JobRunKey, TaskRun, UsageIssue, UsageIssueKind,
    UsageRecord,
};
use crate::domain::allocation::service::cluster_matcher::{clusters_match, effective_cluster};

/// Usage record with its resolved price.
#[derive(Debug, Clone)]
pub struct PricedUsage<'a> {
    pub record: &'a UsageRecord,
    pub unit_price: Option<f64>,
    pub cost_usd: f64,
}

impl<'a> PricedUsage<'a> {
    pub fn new(record: &'a UsageRecord, unit_price: Option<f64>) -> Self {
        Self {
            record,
            unit_price,
            cost_usd: CostUtil::compute_usage_cost(record.quantity, unit_price),
        }
    }

    fn issue(&self, kind: UsageIssueKind) -> UsageIssue {
        UsageIssue {
            kind,
            job_id: self.record.job_id.clone(),
            job_run_id: self.record.job_run_id.clone(),
            cluster_id: self.record.cluster_id.clone(),
            sku_name: self.record.sku_name.clone(),
            observation_date: self.record.observation_date,
            quantity: self.record.quantity,
            cost_usd: self.cost_usd,
        }
    }
}

/// Everything the allocator needs for one `(job_id, job_run_id)`.
///
/// Tasks are expected to be completed, interval-valid, unique per task key
/// and sorted by task key.
#[derive(Debug, Clone)]
pub struct JobRunGroup<'a> {
    pub key: JobRunKey,
    pub job_run: Option<&'a JobRun>,
    pub tasks: Vec<&'a TaskRun>,
    pub usage: Vec<PricedUsage<'a>>,
}

impl<'a> JobRunGroup<'a> {
    pub fn new(key: JobRunKey) -> Self {
        Self {
            key,
            job_run: None,
            tasks: Vec::new(),
            usage: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GroupAllocation {
    pub allocations: Vec<AllocatedCost>,
    pub summary: JobRunCostSummary,
    pub issues: Vec<UsageIssue>,
}

#[derive(Debug, Clone, Copy, Default)]
struct TaskAccumulator {
    quantity: f64,
    cost_usd: f64,
    records: u32,
    concurrency: RunningMean,
}

/// Spreads each usage record over the tasks active in its day window,
/// proportionally to overlap seconds.
pub fn allocate_group(group: &JobRunGroup<'_>) -> GroupAllocation {
    let job_cluster = group.job_run.and_then(|j| j.cluster_id.as_deref());
    let mut acc = vec![TaskAccumulator::default(); group.tasks.len()];
    let mut issues = Vec::new();

    let mut summary = JobRunCostSummary {
        job_id: group.key.job_id.clone(),
        job_run_id: group.key.job_run_id.clone(),
        workspace_id: group
            .job_run
            .map(|j| j.workspace_id.clone())
            .or_else(|| group.tasks.first().map(|t| t.workspace_id.clone())),
        task_count: group.tasks.len() as u32,
        job_duration_seconds: group.job_run.map(|j| j.interval().duration_seconds()),
        ..Default::default()
    };

    for usage in &group.usage {
        summary.usage_record_count += 1;
        summary.total_quantity += usage.record.quantity;
        summary.total_cost_usd += usage.cost_usd;

        if usage.unit_price.is_none() {
            issues.push(usage.issue(UsageIssueKind::Unpriced));
        }

        let window = usage.record.day_window();
        let usage_cluster = usage.record.cluster_id.as_deref();

        let candidates: Vec<(usize, f64)> = group
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| {
                clusters_match(
                    usage_cluster,
                    effective_cluster(task.cluster_id.as_deref(), job_cluster),
                )
            })
            .map(|(idx, task)| (idx, overlap_seconds(&task.interval(), &window)))
            .filter(|(_, secs)| *secs > 0.0)
            .collect();

        let total_overlap: f64 = candidates.iter().map(|(_, secs)| secs).sum();
        if candidates.is_empty() || total_overlap <= 0.0 {
            summary.orphaned_cost_usd += usage.cost_usd;
            issues.push(usage.issue(UsageIssueKind::Orphaned));
            continue;
        }

        let active_tasks = candidates.len() as f64;
        for (idx, secs) in candidates {
            let slot = &mut acc[idx];
            slot.cost_usd += CostUtil::proportional_share(usage.cost_usd, secs, total_overlap);
            slot.quantity += CostUtil::proportional_share(usage.record.quantity, secs, total_overlap);
            slot.records += 1;
            slot.concurrency.push(active_tasks);
        }
    }

    // Second pass: job-run total first, then each task's share of it.
    summary.allocated_cost_usd = acc.iter().map(|a| a.cost_usd).sum();
    summary.allocated_quantity = acc.iter().map(|a| a.quantity).sum();
    summary.allocation_completeness_pct =
        CostUtil::completeness_pct(summary.allocated_cost_usd, summary.total_cost_usd);

    let allocations = group
        .tasks
        .iter()
        .zip(acc.iter())
        .filter(|(_, a)| a.records > 0)
        .map(|(task, a)| {
            let duration = task.duration_seconds();
            AllocatedCost {
                workspace_id: task.workspace_id.clone(),
                job_id: task.job_id.clone(),
                job_run_id: task.job_run_id.clone(),
                task_key: task.task_key.clone(),
                cluster_id: effective_cluster(task.cluster_id.as_deref(), job_cluster)
                    .map(str::to_string),
                allocated_quantity: a.quantity,
                allocated_cost_usd: a.cost_usd,
                usage_records_considered: a.records,
                average_concurrent_tasks: a.concurrency.value(),
                task_duration_seconds: duration,
                cost_per_hour_usd: CostUtil::cost_per_hour(a.cost_usd, duration),
                cost_per_unit_usd: CostUtil::cost_per_unit(a.cost_usd, a.quantity),
                pct_of_job_cost: CostUtil::percent_of(a.cost_usd, summary.allocated_cost_usd),
            }
        })
        .collect();

    GroupAllocation {
        allocations,
        summary,
        issues,
    }
}
