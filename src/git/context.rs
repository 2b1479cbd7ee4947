//! Repository state used to key snapshots.

use std::path::Path;

/// HEAD of the repository containing a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitContext {
    /// Short commit hash (e.g., "a1b2c3d")
    pub commit: String,
    /// Branch name if on a branch (None for detached HEAD)
    pub branch: Option<String>,
}

impl GitContext {
    /// Git's default short SHA length.
    pub const SHORT_HASH_LEN: usize = 7;

    /// Context of the repository at `path`.
    ///
    /// Returns `None` outside a repository, in a repository without commits,
    /// or if any git operation fails.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let repo = gix::discover(path).ok()?;
        let head_commit = repo.head_commit().ok()?;
        let full_hash = head_commit.id().to_string();
        let commit = full_hash
            .get(..Self::SHORT_HASH_LEN)
            .unwrap_or(&full_hash)
            .to_string();

        let branch = repo
            .head_name()
            .ok()
            .flatten()
            .map(|name| name.shorten().to_string());

        log::debug!("HEAD is {commit} ({})", branch.as_deref().unwrap_or("detached"));
        Some(Self { commit, branch })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn no_context_outside_a_repository() {
        let temp_dir = TempDir::new().unwrap();
        assert!(GitContext::from_path(temp_dir.path()).is_none());
    }

    #[test]
    fn no_context_for_a_broken_git_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join(".git")).unwrap();
        assert!(GitContext::from_path(temp_dir.path()).is_none());
    }
}
