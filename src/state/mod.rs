//! Historical metric state: where revisions live on disk, how they are
//! locked, and how a recorded revision is queried.
//!
//! When the project root has a `.git` directory, state files are stored in
//! `.git/metric-delta/` (never committed). Otherwise they fall back to
//! `.metric-delta/` in the project root.

mod lock;
mod revision;
mod store;

pub use lock::{DEFAULT_LOCK_TIMEOUT_MS, LockMode, StateLock};
pub use revision::{Revision, RevisionHistory};
pub use store::{JsonStateStore, RevisionSource};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const STATE_DIR_NAME: &str = "metric-delta";
const FALLBACK_STATE_DIR: &str = ".metric-delta";
const CONFIG_FILENAME: &str = ".metric-delta.toml";

/// Detect the state directory for revision history.
///
/// Only the immediate project root is checked for `.git`, so state always
/// belongs to the project being analyzed.
#[must_use]
pub fn detect_state_dir(project_root: &Path) -> PathBuf {
    let git_dir = project_root.join(".git");
    if git_dir.is_dir() {
        git_dir.join(STATE_DIR_NAME)
    } else {
        project_root.join(FALLBACK_STATE_DIR)
    }
}

/// Discover the project root by walking up from `start`.
///
/// The first ancestor containing a `.git/` directory or a
/// `.metric-delta.toml` file wins; otherwise `start` itself is the root.
#[must_use]
pub fn discover_project_root(start: &Path) -> PathBuf {
    let abs_start = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

    for ancestor in abs_start.ancestors() {
        if ancestor.join(".git").is_dir() || ancestor.join(CONFIG_FILENAME).is_file() {
            return ancestor.to_path_buf();
        }
    }

    abs_start
}

/// Seconds since the UNIX epoch, or 0 if the clock is before it.
#[must_use]
pub fn current_unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

pub(crate) fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
