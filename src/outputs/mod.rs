//! Report rendering for Markdown and HTML.
//!
//! # Submodules
//!
//! - [`markdown`]: README-friendly Markdown report
//! - [`html`]: Standalone HTML page with a CSS bar chart
//!
//! Both renderers are pure: they take the loaded [`BenchmarkResults`] and
//! return a `String`. Writing files is left to the caller.
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── results_report.md
//! └── results_report.html
//! ```

use crate::models::BenchmarkResults;
use crate::stats::{confidence_interval, mean};

pub mod html;
pub mod markdown;

const PLACEHOLDER: &str = "(to be filled in)";

fn or_placeholder(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}

/// One row of the run distribution table.
struct SampleRow {
    label: &'static str,
    count: usize,
    mean: f64,
    low: f64,
    high: f64,
}

/// Rows for every method with at least two samples, in report order.
fn sample_rows(results: &BenchmarkResults) -> Vec<SampleRow> {
    results
        .labelled_samples()
        .into_iter()
        .filter(|(_, samples)| samples.len() >= 2)
        .map(|(label, samples)| {
            let (low, high) = confidence_interval(samples, 0.95);
            SampleRow {
                label,
                count: samples.len(),
                mean: mean(samples),
                low,
                high,
            }
        })
        .collect()
}
