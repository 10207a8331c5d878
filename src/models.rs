//! Data models for benchmark results and the report environment.
//!
//! This module defines the structures read from disk:
//! - [`BenchmarkResults`]: The JSON document written by the benchmark suite
//! - [`MethodResults`]: Per-method timings keyed by method name
//! - [`BaselineResult`] / [`ComparisonResult`]: Timings for the native
//!   baseline and for the methods compared against it
//! - [`ReportEnvironment`]: Optional hardware/OS details from a YAML file
//!
//! The JSON schema uses camelCase keys, mapped with `serde(rename_all)`.

use serde::{Deserialize, Serialize};

/// A complete benchmark run as written by the benchmark suite.
///
/// # JSON Schema
///
/// ```json
/// {
///   "timestamp": "2024-01-01",
///   "volumeCount": 2,
///   "runsPerMethod": 10,
///   "results": {
///     "native":   { "avgTime": 0.05 },
///     "diskutil": { "avgTime": 0.5, "speedup": 10.0 }
///   }
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResults {
    /// When the suite ran, as the suite formatted it.
    pub timestamp: String,
    /// Number of volumes mounted for each run.
    pub volume_count: u64,
    /// Number of timed runs per method.
    pub runs_per_method: u64,
    /// Timings for every method that was benchmarked.
    pub results: MethodResults,
}

/// Per-method timings.
///
/// `native` and `diskutil` are required; `jettison` is only present when the
/// commercial tool was installed on the benchmark machine. Unknown method
/// keys are ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MethodResults {
    pub native: BaselineResult,
    pub diskutil: ComparisonResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jettison: Option<ComparisonResult>,
}

/// Timing for the native API, the baseline every other method is compared to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineResult {
    /// Average ejection time in seconds.
    pub avg_time: f64,
    /// Individual run times in seconds, when the suite recorded them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<f64>,
}

/// Timing for a method compared against the native baseline.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Average ejection time in seconds.
    pub avg_time: f64,
    /// `avg_time / native.avg_time`, precomputed by the suite.
    pub speedup: f64,
    /// Individual run times in seconds, when the suite recorded them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<f64>,
}

impl BenchmarkResults {
    /// Largest average time across the methods present in this run.
    pub fn max_avg_time(&self) -> f64 {
        let r = &self.results;
        let mut max = r.native.avg_time.max(r.diskutil.avg_time);
        if let Some(j) = &r.jettison {
            max = max.max(j.avg_time);
        }
        max
    }

    /// Display labels and samples for every method present, in report order.
    pub fn labelled_samples(&self) -> Vec<(&'static str, &[f64])> {
        let r = &self.results;
        let mut out = vec![
            ("Native API", r.native.samples.as_slice()),
            ("diskutil", r.diskutil.samples.as_slice()),
        ];
        if let Some(j) = &r.jettison {
            out.push(("Jettison", j.samples.as_slice()));
        }
        out
    }
}

/// Details about the machine the benchmarks ran on.
///
/// Loaded from an optional YAML file; any missing value is rendered as a
/// placeholder in the reports.
///
/// ```yaml
/// macos_version: "14.5"
/// hardware: "MacBook Pro M3"
/// disk_types: "USB 3.0 SSD, SD card"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportEnvironment {
    pub macos_version: Option<String>,
    pub hardware: Option<String>,
    pub disk_types: Option<String>,
}
