use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::util::interval_util::Interval;

/// Grouping key shared by task runs, job runs and usage records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobRunKey {
    pub job_id: String,
    pub job_run_id: String,
}

impl JobRunKey {
    pub fn new(job_id: impl Into<String>, job_run_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            job_run_id: job_run_id.into(),
        }
    }
}

impl std::fmt::Display for JobRunKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.job_id, self.job_run_id)
    }
}

/// Envelope window of one job execution.
///
/// Tasks are usually, but not strictly, contained in this window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobRun {
    pub workspace_id: String,
    pub job_id: String,
    pub job_run_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub cluster_id: Option<String>,
}

impl JobRun {
    pub fn key(&self) -> JobRunKey {
        JobRunKey::new(&self.job_id, &self.job_run_id)
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }
}
