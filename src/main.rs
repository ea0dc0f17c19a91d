use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{error, info};

use taskcost_core::batch::{load_batch, run_batch};
use taskcost_core::core::config::AppConfig;
use taskcost_core::core::logging::init_logging;

const ENV_BATCH_FILE: &str = "TASKCOST_BATCH_FILE";

fn main() -> Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    let _guard = init_logging(&config.logging)?;

    let result = run(&config);
    if let Err(err) = &result {
        error!(error = %format!("{err:#}"), "Analysis batch failed");
    }
    result
}

fn run(config: &AppConfig) -> Result<()> {
    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => match std::env::var_os(ENV_BATCH_FILE) {
            Some(path) => PathBuf::from(path),
            None => bail!("usage: taskcost-core <batch.json> (or set {ENV_BATCH_FILE})"),
        },
    };

    let batch = load_batch(&path)?;
    let output = run_batch(&batch, config)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    info!(
        run_id = %output.run_id,
        allocations = output.allocation.allocations.len(),
        recommendations = output.recommendations.recommendations.len(),
        "Analysis batch written"
    );
    Ok(())
}
