use serde::{Deserialize, Serialize};

use crate::domain::common::model::AnalysisWindow;

pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

/// What to do with a structurally invalid record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvalidRecordPolicy {
    /// Fail the whole allocation run on the first invalid record.
    #[default]
    Abort,
    /// Drop the record, log it and list it in the report diagnostics.
    Skip,
}

impl InvalidRecordPolicy {
    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref().to_lowercase().as_str() {
            "abort" => Some(Self::Abort),
            "skip" => Some(Self::Skip),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationOptions {
    /// Usage observed outside this window is left out of the run. A window
    /// whose end is not after its start fails the run with `InvalidWindow`.
    pub window: Option<AnalysisWindow>,
    pub invalid_record_policy: InvalidRecordPolicy,
    /// Restrict allocation to these usage products (case-insensitive).
    pub products: Option<Vec<String>>,
    /// Group count from which job runs are processed on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for AllocationOptions {
    fn default() -> Self {
        Self {
            window: None,
            invalid_record_policy: InvalidRecordPolicy::Abort,
            products: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl AllocationOptions {
    pub fn accepts_product(&self, product: &str) -> bool {
        match &self.products {
            Some(list) => list.iter().any(|p| p.eq_ignore_ascii_case(product)),
            None => true,
        }
    }
}
