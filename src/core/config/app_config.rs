use chrono::NaiveDate;
use validator::Validate;

use crate::domain::allocation::service::allocation_options::DEFAULT_PARALLEL_THRESHOLD;
use crate::domain::allocation::{AllocationOptions, InvalidRecordPolicy};
use crate::domain::common::model::AnalysisWindow;
use crate::domain::recommendation::DEFAULT_SAFETY_MARGIN_PCT;
use crate::errors::ConfigError;

pub const ENV_LOG_LEVEL: &str = "TASKCOST_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKCOST_LOG_DIR";
pub const ENV_SAFETY_MARGIN_PCT: &str = "TASKCOST_SAFETY_MARGIN_PCT";
pub const ENV_INVALID_RECORD_POLICY: &str = "TASKCOST_INVALID_RECORD_POLICY";
pub const ENV_PARALLEL_THRESHOLD: &str = "TASKCOST_PARALLEL_THRESHOLD";
pub const ENV_WINDOW_START: &str = "TASKCOST_WINDOW_START";
pub const ENV_WINDOW_END: &str = "TASKCOST_WINDOW_END";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `taskcost_core=debug`.
    pub level: String,
    /// When set, logs are also written to a daily rolling file here.
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".into(), dir: None }
    }
}

/// Process-level settings for the batch runner.
///
/// | Env Var                          | Default |
/// |----------------------------------|---------|
/// | `TASKCOST_LOG_LEVEL`             | `info`  |
/// | `TASKCOST_LOG_DIR`               | unset   |
/// | `TASKCOST_SAFETY_MARGIN_PCT`     | `20`    |
/// | `TASKCOST_INVALID_RECORD_POLICY` | `abort` |
/// | `TASKCOST_PARALLEL_THRESHOLD`    | `8`     |
/// | `TASKCOST_WINDOW_START` / `_END` | unset   |
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    #[validate(range(min = 0.0, exclusive_max = 100.0))]
    pub safety_margin_pct: f64,
    pub invalid_record_policy: InvalidRecordPolicy,
    #[validate(range(min = 1))]
    pub parallel_threshold: usize,
    #[validate(nested)]
    pub window: Option<AnalysisWindow>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            safety_margin_pct: DEFAULT_SAFETY_MARGIN_PCT,
            invalid_record_policy: InvalidRecordPolicy::Abort,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            window: None,
        }
    }
}

impl AppConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any name -> value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let logging = LoggingConfig {
            level: get(ENV_LOG_LEVEL).unwrap_or(defaults.logging.level),
            dir: get(ENV_LOG_DIR),
        };

        let safety_margin_pct = match get(ENV_SAFETY_MARGIN_PCT) {
            Some(raw) => parse_var(ENV_SAFETY_MARGIN_PCT, &raw)?,
            None => defaults.safety_margin_pct,
        };

        let invalid_record_policy = match get(ENV_INVALID_RECORD_POLICY) {
            Some(raw) => InvalidRecordPolicy::from_code(&raw)
                .ok_or_else(|| invalid_var(ENV_INVALID_RECORD_POLICY, "expected `abort` or `skip`"))?,
            None => defaults.invalid_record_policy,
        };

        let parallel_threshold = match get(ENV_PARALLEL_THRESHOLD) {
            Some(raw) => parse_var(ENV_PARALLEL_THRESHOLD, &raw)?,
            None => defaults.parallel_threshold,
        };

        let window = match (get(ENV_WINDOW_START), get(ENV_WINDOW_END)) {
            (Some(start), Some(end)) => Some(AnalysisWindow::new(
                parse_var::<NaiveDate>(ENV_WINDOW_START, &start)?,
                parse_var::<NaiveDate>(ENV_WINDOW_END, &end)?,
            )),
            (None, None) => None,
            (Some(_), None) => return Err(invalid_var(ENV_WINDOW_END, "required when TASKCOST_WINDOW_START is set")),
            (None, Some(_)) => return Err(invalid_var(ENV_WINDOW_START, "required when TASKCOST_WINDOW_END is set")),
        };

        let config = Self {
            logging,
            safety_margin_pct,
            invalid_record_policy,
            parallel_threshold,
            window,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn allocation_options(&self) -> AllocationOptions {
        AllocationOptions {
            window: self.window,
            invalid_record_policy: self.invalid_record_policy,
            products: None,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

fn parse_var<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| invalid_var(var, e))
}

fn invalid_var<E: ToString>(var: &str, reason: E) -> ConfigError {
    ConfigError::InvalidVar {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}
