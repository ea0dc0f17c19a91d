use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::util::interval_util::Interval;

/// Terminal state reported by the job timeline for a task slice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultState {
    Succeeded,
    Failed,
    TimedOut,
    Canceled,
    Skipped,
    #[serde(other)]
    Other,
}

/// One execution slice of a named task inside a job run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRun {
    pub workspace_id: String,
    pub job_id: String,
    pub job_run_id: String,
    /// Unique within a job run once retry slices are resolved.
    pub task_key: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// `None` while the task is still pending or running.
    #[serde(default)]
    pub result_state: Option<ResultState>,
    #[serde(default)]
    pub cluster_id: Option<String>,
}

impl TaskRun {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }

    pub fn is_complete(&self) -> bool {
        self.result_state.is_some()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.interval().duration_seconds()
    }

    pub fn record_key(&self) -> String {
        format!("{}/{}/{}", self.job_id, self.job_run_id, self.task_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_state_deserializes_from_screaming_codes() {
        let state: ResultState = serde_json::from_value(json!("TIMED_OUT")).unwrap();
        assert_eq!(state, ResultState::TimedOut);
    }

    #[test]
    fn deserializes_pending_task_without_state() {
        let task: TaskRun = serde_json::from_value(json!({
            "workspace_id": "ws-1",
            "job_id": "job-1",
            "job_run_id": "run-1",
            "task_key": "ingest",
            "start_time": "2024-03-01T10:00:00Z",
            "end_time": "2024-03-01T10:30:00Z"
        }))
        .unwrap();

        assert!(!task.is_complete());
        assert_eq!(task.cluster_id, None);
        assert_eq!(task.duration_seconds(), 1800.0);
        assert_eq!(task.record_key(), "job-1/run-1/ingest");
    }

    #[test]
    fn unknown_state_maps_to_other() {
        let state: ResultState = serde_json::from_value(json!("UPSTREAM_FAILED")).unwrap();
        assert_eq!(state, ResultState::Other);
    }
}
