//! Error types for the run summarizer.
//!
//! Every failure is fatal to the invocation: a missing log, a malformed
//! row, or an I/O fault aborts the summarization rather than producing
//! corrupt aggregates.

use std::path::PathBuf;

/// Errors that can occur while summarizing a run.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The run root (or a nested level) contains no subdirectory.
    #[error("no run directory found under {root}")]
    NoRunDirectory {
        /// The directory that was searched.
        root: PathBuf,
    },

    /// The world directory does not contain exactly one action log.
    #[error("expected exactly one action log in {dir}, found {matches}")]
    ActionLogNotFound {
        /// The directory that was searched.
        dir: PathBuf,
        /// How many candidate files matched.
        matches: usize,
    },

    /// A log row could not be parsed.
    #[error("malformed log row at line {line}: {message}")]
    Parse {
        /// 1-based line number in the log file.
        line: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// An underlying filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
