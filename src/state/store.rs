use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{MetricDeltaError, Result};

use super::lock::{DEFAULT_LOCK_TIMEOUT_MS, LockMode, StateLock};
use super::revision::{Revision, RevisionHistory};
use super::{detect_state_dir, ensure_dir};

const LOG_TARGET: &str = "state";
const LOCK_FILENAME: &str = ".lock";

/// Read access to recorded revisions.
pub trait RevisionSource {
    /// The most recent revision recorded for `archiver`.
    ///
    /// # Errors
    /// Returns `NoRevisions` if nothing has been recorded, or an I/O / parse error.
    fn last_revision(&self, archiver: &str) -> Result<Revision>;
}

/// Revision histories stored as one JSON file per archiver.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    state_dir: PathBuf,
    lock_timeout_ms: u64,
}

impl JsonStateStore {
    #[must_use]
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
            lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
        }
    }

    /// Store located in the project's state directory.
    #[must_use]
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(detect_state_dir(project_root))
    }

    #[must_use]
    pub const fn with_lock_timeout(mut self, timeout_ms: u64) -> Self {
        self.lock_timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    #[must_use]
    pub fn history_path(&self, archiver: &str) -> PathBuf {
        self.state_dir.join(format!("{archiver}.json"))
    }

    fn lock(&self, mode: LockMode) -> Result<StateLock> {
        ensure_dir(&self.state_dir)?;
        StateLock::acquire(
            &self.state_dir.join(LOCK_FILENAME),
            mode,
            self.lock_timeout_ms,
        )
    }

    fn read_history(&self, archiver: &str) -> Result<RevisionHistory> {
        let path = self.history_path(archiver);
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RevisionHistory::new());
            }
            Err(e) => return Err(MetricDeltaError::FileRead { path, source: e }),
        };
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Load the full history of `archiver`; empty if none was recorded.
    ///
    /// # Errors
    /// Returns an error if the history file cannot be read or parsed.
    pub fn load_history(&self, archiver: &str) -> Result<RevisionHistory> {
        if !self.history_path(archiver).exists() {
            return Ok(RevisionHistory::new());
        }
        let _lock = self.lock(LockMode::Shared)?;
        self.read_history(archiver)
    }

    /// Record `revision` as the newest entry of its archiver.
    ///
    /// The history is rewritten atomically (temp file + rename) while an
    /// exclusive lock is held.
    ///
    /// # Errors
    /// Returns an error if the history cannot be read, serialized or written.
    pub fn record(&self, revision: Revision, max_revisions: Option<usize>) -> Result<PathBuf> {
        let _lock = self.lock(LockMode::Exclusive)?;

        let archiver = revision.archiver.clone();
        let mut history = self.read_history(&archiver)?;
        history.push(revision, max_revisions);

        let path = self.history_path(&archiver);
        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(&history)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;

        log::debug!(
            target: LOG_TARGET,
            "Recorded revision for '{archiver}' ({} total) in {}",
            history.len(),
            path.display()
        );
        Ok(path)
    }
}

impl RevisionSource for JsonStateStore {
    fn last_revision(&self, archiver: &str) -> Result<Revision> {
        let history = self.load_history(archiver)?;
        let revision = history
            .latest()
            .cloned()
            .ok_or_else(|| MetricDeltaError::NoRevisions {
                archiver: archiver.to_string(),
            })?;
        log::debug!(
            target: LOG_TARGET,
            "Comparing against revision {} of '{archiver}'",
            revision.key
        );
        Ok(revision)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
