//! Command-line interface definitions for the benchmark report generator.
//!
//! Arguments are parsed with `clap`. The optional flags can also be supplied
//! through environment variables.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the report generator.
///
/// # Examples
///
/// ```sh
/// # Reports land next to results.json
/// eject_bench_report results.json
///
/// # With a test environment file and a separate output directory
/// eject_bench_report results.json -c environment.yaml -o ./reports
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the JSON results file produced by the benchmark suite
    pub results_file: PathBuf,

    /// Optional YAML file describing the test environment
    #[arg(short, long, env = "EJECT_REPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for the generated reports (defaults to the results file's directory)
    #[arg(short, long, env = "EJECT_REPORT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}
