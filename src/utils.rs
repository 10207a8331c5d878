//! Helpers for output paths, HTML escaping, and file system checks.

use std::error::Error;
use std::fs as stdfs;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// Where the two reports for a results file are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub dir: PathBuf,
    pub markdown: PathBuf,
    pub html: PathBuf,
}

/// Derive the report paths for `results_file`.
///
/// The reports are named after the input's stem (`results.json` gives
/// `results_report.md` and `results_report.html`) and are placed in
/// `output_dir`, or next to the input file when no directory is given.
///
/// # Examples
///
/// ```ignore
/// let paths = report_paths(Path::new("bench/results.json"), None);
/// assert_eq!(paths.markdown, PathBuf::from("bench/results_report.md"));
/// ```
pub fn report_paths(results_file: &Path, output_dir: Option<&Path>) -> ReportPaths {
    let stem = results_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "results".to_string());
    let dir = match output_dir {
        Some(d) => d.to_path_buf(),
        None => results_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    ReportPaths {
        markdown: dir.join(format!("{stem}_report.md")),
        html: dir.join(format!("{stem}_report.html")),
        dir,
    }
}

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
/// An empty path means the current directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    fs::create_dir_all(path).await?;
    // std fs keeps the error surface simple for a throwaway probe
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
