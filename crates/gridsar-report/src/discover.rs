//! Locating the most recent run's action log.
//!
//! Runs are laid out as `<root>/<session>/<run>/world_1/action*.csv`. The
//! engine appends a new session/run directory pair per run, so the most
//! recently modified directory at each level is the run to summarize.
//! Exactly one `action*` file must exist there; anything else is fatal.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::error::ReportError;

/// Name of the world directory holding the action log.
const WORLD_DIR: &str = "world_1";

/// Filename prefix of the action log.
const ACTION_LOG_PREFIX: &str = "action";

/// Find the action log of the most recent run under `run_root`.
///
/// # Errors
///
/// Returns [`ReportError::NoRunDirectory`] if a directory level has no
/// subdirectories, [`ReportError::ActionLogNotFound`] if the world
/// directory is missing or does not contain exactly one `action*` file,
/// or [`ReportError::Io`] on filesystem faults.
pub fn find_action_log(run_root: &Path) -> Result<PathBuf, ReportError> {
    let session_dir = latest_subdirectory(run_root)?;
    let run_dir = latest_subdirectory(&session_dir)?;
    let world_dir = run_dir.join(WORLD_DIR);
    debug!(world_dir = %world_dir.display(), "scanning for action log");

    if !world_dir.is_dir() {
        return Err(ReportError::ActionLogNotFound {
            dir: world_dir,
            matches: 0,
        });
    }

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(&world_dir)? {
        let entry = entry?;
        let is_log = entry.file_type()?.is_file()
            && entry
                .file_name()
                .to_string_lossy()
                .starts_with(ACTION_LOG_PREFIX);
        if is_log {
            matches.push(entry.path());
        }
    }

    if matches.len() == 1 {
        matches.pop().ok_or_else(|| ReportError::ActionLogNotFound {
            dir: world_dir,
            matches: 0,
        })
    } else {
        Err(ReportError::ActionLogNotFound {
            dir: world_dir,
            matches: matches.len(),
        })
    }
}

/// The most recently modified subdirectory of `dir`.
fn latest_subdirectory(dir: &Path) -> Result<PathBuf, ReportError> {
    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        if latest.as_ref().is_none_or(|(best, _)| modified > *best) {
            latest = Some((modified, entry.path()));
        }
    }
    latest
        .map(|(_, path)| path)
        .ok_or_else(|| ReportError::NoRunDirectory {
            root: dir.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::thread;
    use std::time::Duration;

    use super::*;

    static UNIQUE: AtomicU64 = AtomicU64::new(0);

    fn temp_root(prefix: &str) -> PathBuf {
        let unique = UNIQUE.fetch_add(1, Ordering::Relaxed);
        let pid = std::process::id();
        std::env::temp_dir().join(format!("gridsar-discover-{prefix}-{pid}-{unique}"))
    }

    fn make_run(root: &Path, session: &str, run: &str, logs: &[&str]) {
        let world = root.join(session).join(run).join(WORLD_DIR);
        let _ = fs::create_dir_all(&world);
        for log in logs {
            let _ = fs::write(world.join(log), "header\n");
        }
    }

    #[test]
    fn finds_the_single_action_log() {
        let root = temp_root("single");
        make_run(&root, "session_1", "run_1", &["action_log.csv"]);
        let found = find_action_log(&root);
        assert_eq!(
            found.ok(),
            Some(
                root.join("session_1")
                    .join("run_1")
                    .join(WORLD_DIR)
                    .join("action_log.csv")
            )
        );
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn picks_the_most_recent_run() {
        let root = temp_root("recent");
        make_run(&root, "session_1", "run_1", &["action_old.csv"]);
        // Ensure a strictly later modification time for the second run.
        thread::sleep(Duration::from_millis(20));
        make_run(&root, "session_2", "run_2", &["action_new.csv"]);

        let found = find_action_log(&root);
        assert_eq!(
            found.ok().and_then(|p| p
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())),
            Some("action_new.csv".to_owned())
        );
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn empty_root_is_not_found() {
        let root = temp_root("empty");
        let _ = fs::create_dir_all(&root);
        let found = find_action_log(&root);
        assert!(matches!(found, Err(ReportError::NoRunDirectory { .. })));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn zero_or_many_logs_are_fatal() {
        let root = temp_root("many");
        make_run(&root, "s", "r", &["action_a.csv", "action_b.csv"]);
        let found = find_action_log(&root);
        assert!(matches!(
            found,
            Err(ReportError::ActionLogNotFound { matches: 2, .. })
        ));
        let _ = fs::remove_dir_all(&root);

        let root = temp_root("none");
        make_run(&root, "s", "r", &["notes.txt"]);
        let found = find_action_log(&root);
        assert!(matches!(
            found,
            Err(ReportError::ActionLogNotFound { matches: 0, .. })
        ));
        let _ = fs::remove_dir_all(&root);
    }
}
