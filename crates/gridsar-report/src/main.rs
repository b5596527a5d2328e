//! Run-log summarizer entry point for the Gridsar simulation.
//!
//! After a run completes, the engine leaves an action log under the run's
//! output tree. This binary locates the most recent run's log, performs
//! one aggregation pass, and writes a single-row summary CSV next to it.
//!
//! ```text
//! run root --> discover --> parse --> aggregate --> output.csv
//! ```
//!
//! Any missing or malformed input is fatal: the process exits with an
//! error rather than writing a partial or skewed summary.

mod discover;
mod error;
mod parse;
mod summary;
mod writer;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Initializes logging, resolves the run root from the first argument,
/// then discovers, summarizes, and writes.
///
/// # Errors
///
/// Returns an error if discovery, parsing, or writing fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let run_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("usage: gridsar-report <run-root-directory>"))?;
    info!(run_root = %run_root.display(), "gridsar-report starting");

    let log_path = discover::find_action_log(&run_root)?;
    info!(log = %log_path.display(), "action log located");

    let row = summary::summarize_log(&log_path)?;
    info!(
        ticks = %row.no_ticks,
        completeness = %row.completeness,
        score = %row.score,
        "run summarized"
    );

    let out_path = log_path.with_file_name(writer::OUTPUT_FILE_NAME);
    writer::write_summary(&out_path, &row)?;
    info!(output = %out_path.display(), "summary written");

    Ok(())
}
