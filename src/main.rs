//! # Eject Bench Report
//!
//! Turns the JSON written by the disk ejection benchmark suite into two
//! static reports: a Markdown document for the README and a standalone HTML
//! page with a bar chart.
//!
//! ## Usage
//!
//! ```sh
//! eject_bench_report results.json
//! # -> results_report.md, results_report.html next to results.json
//! ```
//!
//! ## Pipeline
//!
//! 1. **Load**: Parse the results JSON (and an optional environment YAML)
//! 2. **Render**: Build the Markdown and HTML documents
//! 3. **Write**: Store both next to the input, or in `--output-dir`
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tokio::fs;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod load;
mod models;
mod outputs;
mod stats;
mod utils;

use cli::Cli;
use load::{load_environment, load_results};
use outputs::{html, markdown};
use utils::{ReportPaths, ensure_writable_dir, report_paths};

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    // Usage errors exit 1; --help and --version exit 0
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };
    debug!(?args.results_file, ?args.config, ?args.output_dir, "Parsed CLI arguments");

    println!("Loading results from: {}", args.results_file.display());
    let start_time = std::time::Instant::now();

    match run(&args).await {
        Ok(paths) => {
            println!("Markdown report generated: {}", paths.markdown.display());
            println!("HTML report generated: {}", paths.html.display());
            println!("\nReports generated successfully!");
            println!("  Markdown: {}", paths.markdown.display());
            println!("  HTML: {}", paths.html.display());
            info!(elapsed = ?start_time.elapsed(), "Execution complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Report generation failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load the results, render both reports and write them to disk.
///
/// Nothing is written unless the results file loads and parses.
#[instrument(level = "info", skip_all, fields(results_file = %args.results_file.display()))]
async fn run(args: &Cli) -> Result<ReportPaths, Box<dyn Error>> {
    let results = load_results(&args.results_file).await?;
    let env = load_environment(args.config.as_deref()).await?;

    let paths = report_paths(&args.results_file, args.output_dir.as_deref());
    ensure_writable_dir(&paths.dir).await?;

    let md = markdown::render(&results, &env);
    fs::write(&paths.markdown, md).await?;
    info!(path = %paths.markdown.display(), "Wrote Markdown report");

    let page = html::render(&results, &env);
    fs::write(&paths.html, page).await?;
    info!(path = %paths.html.display(), "Wrote HTML report");

    Ok(paths)
}
