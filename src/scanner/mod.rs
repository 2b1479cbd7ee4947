//! File discovery for snapshots and for directories passed to `diff`.

mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::config::ScannerConfig;
use crate::error::Result;
use crate::language::LanguageRegistry;

pub trait FileScanner {
    /// Scan a directory and return all matching file paths, sorted.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Build the scanner described by `[scanner]`.
///
/// Without configured extensions, every extension claimed by a known
/// language is scanned.
///
/// # Errors
/// Returns an error if an exclude pattern is invalid.
pub fn scanner_from_config(
    config: &ScannerConfig,
    languages: &LanguageRegistry,
) -> Result<DirectoryScanner<GlobFilter>> {
    let extensions = if config.extensions.is_empty() {
        languages.extensions()
    } else {
        config.extensions.clone()
    };
    let filter = GlobFilter::new(extensions, &config.exclude)?;
    Ok(DirectoryScanner::with_gitignore(filter, config.gitignore))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
