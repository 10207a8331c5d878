//! Reading the benchmark results and the optional environment file.

use crate::models::{BenchmarkResults, ReportEnvironment};
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Load benchmark results from a JSON file.
///
/// # Errors
///
/// - `Results file not found: <path>` when the path does not exist
/// - A `serde_json` error for malformed JSON or missing required keys
///   (`native`, `diskutil`, or a field inside them)
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_results(path: &Path) -> Result<BenchmarkResults, Box<dyn Error>> {
    if !fs::try_exists(path).await? {
        return Err(format!("Results file not found: {}", path.display()).into());
    }
    let raw = fs::read_to_string(path).await?;
    let results: BenchmarkResults = serde_json::from_str(&raw)?;
    info!(
        timestamp = %results.timestamp,
        volumes = results.volume_count,
        runs = results.runs_per_method,
        jettison = results.results.jettison.is_some(),
        "Loaded benchmark results"
    );
    Ok(results)
}

/// Load the test environment description from a YAML file.
///
/// `None` yields an empty environment, so the reports show placeholders.
#[instrument(level = "info", skip_all)]
pub async fn load_environment(path: Option<&Path>) -> Result<ReportEnvironment, Box<dyn Error>> {
    let Some(path) = path else {
        debug!("No environment file given; using placeholders");
        return Ok(ReportEnvironment::default());
    };
    if !fs::try_exists(path).await? {
        return Err(format!("Environment file not found: {}", path.display()).into());
    }
    let raw = fs::read_to_string(path).await?;
    let env: ReportEnvironment = serde_yaml::from_str(&raw)?;
    info!(path = %path.display(), "Loaded test environment");
    Ok(env)
}
