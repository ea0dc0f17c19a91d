/// Whether a usage record's cluster can be attributed to a task's cluster.
///
/// A missing cluster on either side matches anything in the same job run.
/// This over-attributes when one job run spans several clusters and some
/// rows lack a cluster id; tightening it would change reported completeness.
#[inline]
pub fn clusters_match(usage_cluster: Option<&str>, task_cluster: Option<&str>) -> bool {
    match (usage_cluster, task_cluster) {
        (Some(u), Some(t)) => u == t,
        _ => true,
    }
}

/// Cluster a task ran on, inheriting the job run's cluster when the task has none.
#[inline]
pub fn effective_cluster<'a>(task_cluster: Option<&'a str>, job_cluster: Option<&'a str>) -> Option<&'a str> {
    task_cluster.or(job_cluster)
}
