use crate::error::Result;
use chrono::{DateTime, Local, NaiveDateTime};
use std::path::PathBuf;

/// A rotated log file matched by the glob pattern, annotated with its
/// modification time in local wall-clock terms.
#[derive(Debug, Clone)]
pub struct LogFileCandidate {
    pub path: PathBuf,
    pub modified: NaiveDateTime,
}

/// Expand `pattern` and pick the log file most likely to contain the record
/// of an execution at `expected`: the oldest candidate whose modification
/// time is strictly after `expected`.
///
/// A rotated file stops receiving lines at its modification time, so the
/// first file young enough is the smallest window still covering the
/// expected instant. Returns `None` when nothing matches the pattern or
/// every match is too old.
pub fn select_log_file(pattern: &str, expected: &NaiveDateTime) -> Result<Option<LogFileCandidate>> {
    let mut candidates = Vec::new();

    for entry in glob::glob(pattern)? {
        let path = entry.map_err(|e| e.into_error())?;
        let metadata = std::fs::metadata(&path)?;
        if !metadata.is_file() {
            continue;
        }
        let modified: DateTime<Local> = metadata.modified()?.into();
        candidates.push(LogFileCandidate {
            path,
            modified: modified.naive_local(),
        });
    }

    // Ties in modification time resolve by path, keeping one run's
    // selection deterministic.
    candidates.sort_by(|a, b| (a.modified, &a.path).cmp(&(b.modified, &b.path)));

    Ok(candidates
        .into_iter()
        .find(|candidate| candidate.modified > *expected))
}
