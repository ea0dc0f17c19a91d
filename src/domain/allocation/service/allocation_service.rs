use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::core::util::cost_util::CostUtil;
use crate::domain::allocation::model::{
    AllocatedCost, AllocationDiagnostics, AllocationReport, AllocationTotals, JobRun, JobRunKey,
    PriceRecord, SkippedRecord, TaskRun, UsageIssueKind, UsageRecord,
};
use crate::domain::allocation::service::allocation_options::{AllocationOptions, InvalidRecordPolicy};
use crate::domain::allocation::service::overlap_allocator::{
    allocate_group, GroupAllocation, JobRunGroup, PricedUsage,
};
use crate::domain::allocation::service::price_resolver::PriceResolver;
use crate::errors::{AllocationError, RecordKind};

type TaskSlices<'a> = BTreeMap<JobRunKey, BTreeMap<&'a str, &'a TaskRun>>;

/// Allocates usage cost to tasks with default options and returns only the
/// per-task figures.
pub fn allocate(
    task_runs: &[TaskRun],
    job_runs: &[JobRun],
    usage_records: &[UsageRecord],
    price_records: &[PriceRecord],
) -> Result<Vec<AllocatedCost>, AllocationError> {
    allocate_with_options(
        task_runs,
        job_runs,
        usage_records,
        price_records,
        &AllocationOptions::default(),
    )
    .map(|report| report.allocations)
}

/// Allocates usage cost to tasks and reports totals, completeness and every
/// record that could not be fully attributed.
pub fn allocate_with_options(
    task_runs: &[TaskRun],
    job_runs: &[JobRun],
    usage_records: &[UsageRecord],
    price_records: &[PriceRecord],
    options: &AllocationOptions,
) -> Result<AllocationReport, AllocationError> {
    if let Some(window) = &options.window {
        window.validate().map_err(|e| AllocationError::InvalidWindow {
            key: format!("{}..{}", window.start_date, window.end_date),
            reason: e.to_string(),
        })?;
    }

    let policy = options.invalid_record_policy;
    let mut diagnostics = AllocationDiagnostics::default();

    let job_index = index_job_runs(job_runs, policy, &mut diagnostics)?;
    let slices = select_task_runs(task_runs, policy, &mut diagnostics)?;
    let resolver = {
        let skipped = &mut diagnostics.skipped_records;
        PriceResolver::build(price_records, |err| reject(policy, err, skipped))?
    };
    let priced = price_usage(usage_records, &resolver, options, &mut diagnostics)?;

    let groups = build_groups(&job_index, slices, priced);
    debug!(
        groups = groups.len(),
        skus = resolver.sku_count(),
        policy = policy.as_code(),
        "Allocating usage across job runs"
    );

    let results: Vec<GroupAllocation> = if groups.len() >= options.parallel_threshold {
        groups.par_iter().map(allocate_group).collect()
    } else {
        groups.iter().map(allocate_group).collect()
    };

    Ok(assemble_report(results, options, diagnostics))
}

fn reject(
    policy: InvalidRecordPolicy,
    err: AllocationError,
    skipped: &mut Vec<SkippedRecord>,
) -> Result<(), AllocationError> {
    match policy {
        InvalidRecordPolicy::Abort => Err(err),
        InvalidRecordPolicy::Skip => {
            warn!(kind = %err.kind(), key = err.key(), "Skipping invalid record: {}", err);
            skipped.push(SkippedRecord::from(&err));
            Ok(())
        }
    }
}

fn index_job_runs<'a>(
    job_runs: &'a [JobRun],
    policy: InvalidRecordPolicy,
    diagnostics: &mut AllocationDiagnostics,
) -> Result<HashMap<JobRunKey, &'a JobRun>, AllocationError> {
    let mut index: HashMap<JobRunKey, &JobRun> = HashMap::new();

    for job_run in job_runs {
        if !job_run.interval().is_valid() {
            let err = AllocationError::InvalidInterval {
                kind: RecordKind::JobRun,
                key: job_run.key().to_string(),
                start: job_run.start_time,
                end: job_run.end_time,
            };
            reject(policy, err, &mut diagnostics.skipped_records)?;
            continue;
        }

        let key = job_run.key();
        match index.get(&key).copied() {
            Some(existing) if existing.end_time >= job_run.end_time => {}
            _ => {
                index.insert(key, job_run);
            }
        }
    }

    Ok(index)
}

/// Keeps completed, interval-valid tasks; among retry slices of the same
/// task key the one that ended last wins.
fn select_task_runs<'a>(
    task_runs: &'a [TaskRun],
    policy: InvalidRecordPolicy,
    diagnostics: &mut AllocationDiagnostics,
) -> Result<TaskSlices<'a>, AllocationError> {
    let mut selected: TaskSlices<'a> = BTreeMap::new();

    for task in task_runs {
        if !task.is_complete() {
            diagnostics.incomplete_task_runs += 1;
            continue;
        }

        if !task.interval().is_valid() {
            let err = AllocationError::InvalidInterval {
                kind: RecordKind::TaskRun,
                key: task.record_key(),
                start: task.start_time,
                end: task.end_time,
            };
            reject(policy, err, &mut diagnostics.skipped_records)?;
            continue;
        }

        let slices = selected
            .entry(JobRunKey::new(&task.job_id, &task.job_run_id))
            .or_default();

        match slices.get(task.task_key.as_str()).copied() {
            Some(existing) => {
                diagnostics.superseded_task_slices += 1;
                if task.end_time > existing.end_time {
                    slices.insert(task.task_key.as_str(), task);
                }
            }
            None => {
                slices.insert(task.task_key.as_str(), task);
            }
        }
    }

    if diagnostics.superseded_task_slices > 0 {
        warn!(
            superseded = diagnostics.superseded_task_slices,
            "Duplicate task slices found; kept the latest slice per task key"
        );
    }

    Ok(selected)
}

fn price_usage<'a>(
    usage_records: &'a [UsageRecord],
    resolver: &PriceResolver,
    options: &AllocationOptions,
    diagnostics: &mut AllocationDiagnostics,
) -> Result<Vec<PricedUsage<'a>>, AllocationError> {
    let mut priced = Vec::with_capacity(usage_records.len());

    for record in usage_records {
        if !record.quantity.is_finite() || record.quantity < 0.0 {
            let err = AllocationError::InvalidUsage {
                key: record.record_key(),
                reason: format!("quantity {} is not a finite non-negative number", record.quantity),
            };
            reject(options.invalid_record_policy, err, &mut diagnostics.skipped_records)?;
            continue;
        }

        if let Some(window) = &options.window {
            if !window.contains(record.observation_date) {
                diagnostics.out_of_window_records += 1;
                continue;
            }
        }

        if !options.accepts_product(&record.product) {
            diagnostics.filtered_product_records += 1;
            continue;
        }

        let unit_price = resolver.resolve(&record.sku_name, record.observation_date);
        priced.push(PricedUsage::new(record, unit_price));
    }

    Ok(priced)
}

fn build_groups<'a>(
    job_index: &HashMap<JobRunKey, &'a JobRun>,
    slices: TaskSlices<'a>,
    priced: Vec<PricedUsage<'a>>,
) -> Vec<JobRunGroup<'a>> {
    let mut groups: BTreeMap<JobRunKey, JobRunGroup<'a>> = BTreeMap::new();

    for (key, tasks) in slices {
        let group = groups
            .entry(key.clone())
            .or_insert_with(|| JobRunGroup::new(key));
        group.tasks = tasks.into_values().collect();
    }

    for usage in priced {
        let key = usage.record.key();
        groups
            .entry(key.clone())
            .or_insert_with(|| JobRunGroup::new(key))
            .usage
            .push(usage);
    }

    for (key, group) in groups.iter_mut() {
        group.job_run = job_index.get(key).copied();
    }

    groups.into_values().collect()
}

fn assemble_report(
    results: Vec<GroupAllocation>,
    options: &AllocationOptions,
    mut diagnostics: AllocationDiagnostics,
) -> AllocationReport {
    let mut allocations = Vec::new();
    let mut job_runs = Vec::with_capacity(results.len());
    let mut totals = AllocationTotals::default();

    for result in results {
        totals.job_run_count += 1;
        totals.total_cost_usd += result.summary.total_cost_usd;
        totals.allocated_cost_usd += result.summary.allocated_cost_usd;
        totals.orphaned_cost_usd += result.summary.orphaned_cost_usd;
        totals.total_quantity += result.summary.total_quantity;
        totals.allocated_quantity += result.summary.allocated_quantity;

        allocations.extend(result.allocations);
        diagnostics.usage_issues.extend(result.issues);
        job_runs.push(result.summary);
    }

    totals.allocation_completeness_pct =
        CostUtil::completeness_pct(totals.allocated_cost_usd, totals.total_cost_usd);

    let orphaned = diagnostics.count_issues(UsageIssueKind::Orphaned);
    let unpriced = diagnostics.count_issues(UsageIssueKind::Unpriced);
    if orphaned > 0 || unpriced > 0 {
        warn!(
            orphaned,
            unpriced,
            orphaned_cost_usd = totals.orphaned_cost_usd,
            "Usage could not be fully attributed"
        );
    }

    info!(
        job_runs = totals.job_run_count,
        tasks = allocations.len(),
        total_cost_usd = totals.total_cost_usd,
        completeness_pct = totals.allocation_completeness_pct,
        "Allocation finished"
    );

    AllocationReport {
        window: options.window,
        allocations,
        job_runs,
        totals,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allocation::model::ResultState;
    use crate::domain::common::model::AnalysisWindow;
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::seconds(secs)
    }

    fn task(run: &str, key: &str, start: i64, end: i64) -> TaskRun {
        TaskRun {
            workspace_id: "ws".into(),
            job_id: "job".into(),
            job_run_id: run.into(),
            task_key: key.into(),
            start_time: at(start),
            end_time: at(end),
            result_state: Some(ResultState::Succeeded),
            cluster_id: None,
        }
    }

    fn usage(run: &str, quantity: f64, date: NaiveDate) -> UsageRecord {
        UsageRecord {
            job_id: "job".into(),
            job_run_id: run.into(),
            cluster_id: None,
            product: "JOBS".into(),
            quantity,
            observation_date: date,
            sku_name: "JOBS_COMPUTE".into(),
        }
    }

    fn prices(unit_price: f64) -> Vec<PriceRecord> {
        vec![PriceRecord {
            sku_name: "JOBS_COMPUTE".into(),
            unit_price,
            price_start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            price_end: None,
        }]
    }

    fn skip() -> AllocationOptions {
        AllocationOptions {
            invalid_record_policy: InvalidRecordPolicy::Skip,
            ..Default::default()
        }
    }

    #[test]
    fn two_overlapping_tasks_split_ten_dollars_evenly() {
        let tasks = vec![task("r1", "a", 0, 100), task("r1", "b", 50, 150)];
        let usage = vec![usage("r1", 10.0, day())];

        let out = allocate(&tasks, &[], &usage, &prices(1.0)).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].task_key, "a");
        assert_eq!(out[1].task_key, "b");
        assert!(CostUtil::approx_eq(out[0].allocated_cost_usd, 5.0));
        assert!(CostUtil::approx_eq(out[1].allocated_cost_usd, 5.0));
    }

    #[test]
    fn identical_intervals_split_exactly_in_half() {
        let tasks = vec![task("r1", "a", 0, 500), task("r1", "b", 0, 500)];
        let usage = vec![usage("r1", 7.0, day()), usage("r1", 3.0, day())];

        let out = allocate(&tasks, &[], &usage, &prices(0.3)).unwrap();

        assert_eq!(out[0].allocated_cost_usd, out[1].allocated_cost_usd);
        assert_eq!(out[0].allocated_quantity, 5.0);
        assert_eq!(out[1].allocated_quantity, 5.0);
        assert_eq!(out[0].usage_records_considered, 2);
    }

    #[test]
    fn single_active_task_receives_full_cost() {
        let tasks = vec![task("r1", "only", 0, 60)];
        let usage = vec![usage("r1", 4.0, day())];

        let out = allocate(&tasks, &[], &usage, &prices(2.5)).unwrap();

        assert_eq!(out.len(), 1);
        assert!(CostUtil::approx_eq(out[0].allocated_cost_usd, 10.0));
        assert_eq!(out[0].pct_of_job_cost, 100.0);
        assert_eq!(out[0].average_concurrent_tasks, 1.0);
    }

    #[test]
    fn allocation_conserves_cost_per_job_run() {
        let tasks = vec![
            task("r1", "extract", 0, 1_000),
            task("r1", "transform", 400, 2_300),
            task("r1", "load", 2_000, 2_900),
            task("r2", "score", 0, 17),
            task("r2", "publish", 5, 13),
        ];
        let usage = vec![
            usage("r1", 3.3, day()),
            usage("r1", 0.7, day()),
            usage("r2", 1.9, day()),
        ];

        let report =
            allocate_with_options(&tasks, &[], &usage, &prices(0.37), &AllocationOptions::default())
                .unwrap();

        for run in ["r1", "r2"] {
            let allocated: f64 = report
                .allocations
                .iter()
                .filter(|a| a.job_run_id == run)
                .map(|a| a.allocated_cost_usd)
                .sum();
            let summary = report.job_run("job", run).unwrap();
            assert!(CostUtil::approx_eq(allocated, summary.total_cost_usd));
            assert!(CostUtil::approx_eq(summary.allocation_completeness_pct, 100.0));
        }
        assert!(report.allocations.iter().all(|a| a.allocated_cost_usd >= 0.0 && a.allocated_quantity >= 0.0));
        assert!(CostUtil::approx_eq(report.totals.allocation_completeness_pct, 100.0));
        assert!(report.diagnostics.usage_issues.is_empty());
    }

    #[test]
    fn orphaned_usage_is_flagged_and_lowers_completeness() {
        let other_day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let tasks = vec![task("r1", "a", 0, 100)];
        let usage = vec![usage("r1", 10.0, day()), usage("r1", 10.0, other_day)];

        let report =
            allocate_with_options(&tasks, &[], &usage, &prices(1.0), &AllocationOptions::default())
                .unwrap();

        let summary = report.job_run("job", "r1").unwrap();
        assert!(CostUtil::approx_eq(summary.allocated_cost_usd, 10.0));
        assert!(CostUtil::approx_eq(summary.orphaned_cost_usd, 10.0));
        assert!(CostUtil::approx_eq(summary.allocation_completeness_pct, 50.0));
        assert!(report.totals.allocation_completeness_pct < 100.0);

        let orphans: Vec<_> = report.diagnostics.orphaned().collect();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].observation_date, other_day);
    }

    #[test]
    fn usage_without_any_tasks_is_orphaned() {
        let usage = vec![usage("ghost", 2.0, day())];
        let report =
            allocate_with_options(&[], &[], &usage, &prices(1.0), &AllocationOptions::default())
                .unwrap();

        assert!(report.allocations.is_empty());
        assert_eq!(report.totals.allocation_completeness_pct, 0.0);
        assert_eq!(report.diagnostics.count_issues(UsageIssueKind::Orphaned), 1);
    }

    #[test]
    fn missing_price_is_reported_not_fatal() {
        let tasks = vec![task("r1", "a", 0, 100)];
        let usage = vec![usage("r1", 10.0, day())];

        let report =
            allocate_with_options(&tasks, &[], &usage, &[], &AllocationOptions::default()).unwrap();

        assert_eq!(report.allocations[0].allocated_cost_usd, 0.0);
        assert_eq!(report.allocations[0].allocated_quantity, 10.0);
        assert_eq!(report.diagnostics.count_issues(UsageIssueKind::Unpriced), 1);
    }

    #[test]
    fn incomplete_tasks_are_excluded() {
        let mut pending = task("r1", "pending", 0, 100);
        pending.result_state = None;
        let tasks = vec![task("r1", "done", 0, 100), pending];
        let usage = vec![usage("r1", 1.0, day())];

        let report =
            allocate_with_options(&tasks, &[], &usage, &prices(1.0), &AllocationOptions::default())
                .unwrap();

        assert_eq!(report.allocations.len(), 1);
        assert_eq!(report.allocations[0].task_key, "done");
        assert_eq!(report.diagnostics.incomplete_task_runs, 1);
        assert_eq!(report.job_run("job", "r1").unwrap().task_count, 1);
    }

    #[test]
    fn reversed_task_interval_aborts_by_default() {
        let tasks = vec![task("r1", "bad", 100, 50)];
        let err = allocate(&tasks, &[], &[], &[]).unwrap_err();

        match err {
            AllocationError::InvalidInterval { kind, key, .. } => {
                assert_eq!(kind, RecordKind::TaskRun);
                assert_eq!(key, "job/r1/bad");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reversed_task_interval_is_skipped_under_skip_policy() {
        let tasks = vec![task("r1", "bad", 100, 50), task("r1", "good", 0, 100)];
        let usage = vec![usage("r1", 2.0, day())];

        let report = allocate_with_options(&tasks, &[], &usage, &prices(1.0), &skip()).unwrap();

        assert_eq!(report.allocations.len(), 1);
        assert!(CostUtil::approx_eq(report.allocations[0].allocated_cost_usd, 2.0));
        assert_eq!(report.diagnostics.skipped_of(RecordKind::TaskRun), 1);
    }

    #[test]
    fn reversed_job_run_and_negative_quantity_are_structural_errors() {
        let job_run = JobRun {
            workspace_id: "ws".into(),
            job_id: "job".into(),
            job_run_id: "r1".into(),
            start_time: at(10),
            end_time: at(0),
            cluster_id: None,
        };
        let err = allocate(&[], &[job_run.clone()], &[], &[]).unwrap_err();
        assert_eq!(err.kind(), RecordKind::JobRun);

        let bad_usage = vec![usage("r1", -1.0, day())];
        let err = allocate(&[], &[], &bad_usage, &[]).unwrap_err();
        assert!(matches!(err, AllocationError::InvalidUsage { .. }));

        let report = allocate_with_options(&[], &[job_run], &bad_usage, &[], &skip()).unwrap();
        assert_eq!(report.diagnostics.skipped_records.len(), 2);
    }

    #[test]
    fn invalid_price_is_a_structural_error_that_can_be_skipped() {
        let tasks = vec![task("r1", "a", 0, 100), task("r2", "a", 0, 100)];
        let mut bad = usage("r2", 10.0, day());
        bad.sku_name = "BAD".into();
        let usage = vec![usage("r1", 4.0, day()), bad];
        let nan_price = PriceRecord {
            sku_name: "BAD".into(),
            unit_price: f64::NAN,
            ..prices(1.0)[0].clone()
        };
        let mut price_list = prices(1.0);
        price_list.push(nan_price);

        let err = allocate(&tasks, &[], &usage, &price_list).unwrap_err();
        assert!(matches!(err, AllocationError::InvalidPrice { .. }));

        let report = allocate_with_options(&tasks, &[], &usage, &price_list, &skip()).unwrap();
        assert_eq!(report.diagnostics.skipped_of(RecordKind::PriceRecord), 1);
        assert_eq!(report.diagnostics.count_issues(UsageIssueKind::Unpriced), 1);
        assert!(report.totals.total_cost_usd.is_finite());
        assert!(CostUtil::approx_eq(report.totals.total_cost_usd, 4.0));
        let r2 = report.task("job", "r2", "a").unwrap();
        assert_eq!(r2.allocated_cost_usd, 0.0);
        assert!(CostUtil::approx_eq(r2.allocated_quantity, 10.0));
    }

    #[test]
    fn negative_price_never_yields_negative_cost() {
        let tasks = vec![task("r1", "a", 0, 100)];
        let usage = vec![usage("r1", 10.0, day())];

        assert!(allocate(&tasks, &[], &usage, &prices(-2.0)).is_err());

        let report = allocate_with_options(&tasks, &[], &usage, &prices(-2.0), &skip()).unwrap();
        assert!(report.allocations.iter().all(|a| a.allocated_cost_usd >= 0.0));
        assert_eq!(report.diagnostics.skipped_records.len(), 1);
    }

    #[test]
    fn reversed_window_is_rejected_up_front() {
        let tasks = vec![task("r1", "a", 0, 100)];
        let usage = vec![usage("r1", 1.0, day())];
        let options = AllocationOptions {
            window: Some(AnalysisWindow::new(
                NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            )),
            invalid_record_policy: InvalidRecordPolicy::Skip,
            ..Default::default()
        };

        let err = allocate_with_options(&tasks, &[], &usage, &prices(1.0), &options).unwrap_err();
        assert_eq!(err.kind(), RecordKind::AnalysisWindow);
        assert_eq!(err.key(), "2024-04-01..2024-03-01");
    }

    #[test]
    fn latest_retry_slice_wins() {
        let tasks = vec![
            task("r1", "a", 0, 10),
            task("r1", "a", 20, 100),
            task("r1", "b", 20, 100),
        ];
        let usage = vec![usage("r1", 6.0, day())];

        let report =
            allocate_with_options(&tasks, &[], &usage, &prices(1.0), &AllocationOptions::default())
                .unwrap();

        assert_eq!(report.diagnostics.superseded_task_slices, 1);
        let a = report.task("job", "r1", "a").unwrap();
        assert_eq!(a.task_duration_seconds, 80.0);
        assert!(CostUtil::approx_eq(a.allocated_cost_usd, 3.0));
    }

    #[test]
    fn window_and_product_filters_drop_usage() {
        let tasks = vec![task("r1", "a", 0, 100)];
        let mut sql = usage("r1", 5.0, day());
        sql.product = "SQL".into();
        let usage = vec![
            usage("r1", 1.0, day()),
            usage("r1", 1.0, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()),
            sql,
        ];
        let options = AllocationOptions {
            window: Some(AnalysisWindow::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            )),
            products: Some(vec!["jobs".into()]),
            ..Default::default()
        };

        let report = allocate_with_options(&tasks, &[], &usage, &prices(1.0), &options).unwrap();

        assert_eq!(report.diagnostics.out_of_window_records, 1);
        assert_eq!(report.diagnostics.filtered_product_records, 1);
        assert!(CostUtil::approx_eq(report.totals.total_cost_usd, 1.0));
        assert_eq!(report.window, options.window);
    }

    #[test]
    fn job_run_envelope_is_attached_to_summary() {
        let job_run = JobRun {
            workspace_id: "ws-9".into(),
            job_id: "job".into(),
            job_run_id: "r1".into(),
            start_time: at(-30),
            end_time: at(120),
            cluster_id: Some("c-1".into()),
        };
        let tasks = vec![task("r1", "a", 0, 100)];
        let mut u = usage("r1", 1.0, day());
        u.cluster_id = Some("c-1".into());

        let report = allocate_with_options(
            &tasks,
            &[job_run],
            &[u],
            &prices(1.0),
            &AllocationOptions::default(),
        )
        .unwrap();

        let summary = report.job_run("job", "r1").unwrap();
        assert_eq!(summary.workspace_id.as_deref(), Some("ws-9"));
        assert_eq!(summary.job_duration_seconds, Some(150.0));
        assert_eq!(report.allocations[0].cluster_id.as_deref(), Some("c-1"));
    }

    #[test]
    fn parallel_and_sequential_paths_agree_and_are_idempotent() {
        let mut tasks = Vec::new();
        let mut usage_rows = Vec::new();
        for run in 0..24 {
            let run_id = format!("r{run:02}");
            for t in 0..3 {
                tasks.push(task(&run_id, &format!("t{t}"), t * 30, 200 + run * 10));
            }
            usage_rows.push(usage(&run_id, 1.0 + run as f64, day()));
        }

        let sequential = AllocationOptions {
            parallel_threshold: usize::MAX,
            ..Default::default()
        };
        let parallel = AllocationOptions {
            parallel_threshold: 1,
            ..Default::default()
        };

        let a = allocate_with_options(&tasks, &[], &usage_rows, &prices(0.2), &sequential).unwrap();
        let b = allocate_with_options(&tasks, &[], &usage_rows, &prices(0.2), &parallel).unwrap();
        let c = allocate_with_options(&tasks, &[], &usage_rows, &prices(0.2), &parallel).unwrap();

        assert_eq!(a.allocations, b.allocations);
        assert_eq!(b, c);
        assert_eq!(a.job_runs.len(), 24);
    }
}
