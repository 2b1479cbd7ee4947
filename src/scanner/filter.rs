use std::collections::HashSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{MetricDeltaError, Result};

pub trait FileFilter {
    /// `relative` is the file's path below the directory being scanned.
    fn should_include(&self, relative: &Path) -> bool;
}

/// Extension allow-list plus glob exclusions.
pub struct GlobFilter {
    /// `None` accepts every extension.
    extensions: Option<HashSet<String>>,
    excludes: GlobSet,
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| MetricDeltaError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| MetricDeltaError::InvalidPattern {
            pattern: patterns.join(", "),
            source,
        })
}

impl GlobFilter {
    /// Create a filter. An empty extension list accepts every extension;
    /// extensions compare without ASCII case.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let extensions = (!extensions.is_empty()).then(|| {
            extensions
                .iter()
                .map(|ext| ext.to_ascii_lowercase())
                .collect()
        });
        Ok(Self {
            extensions,
            excludes: build_exclude_set(exclude_patterns)?,
        })
    }

    fn accepts_extension(&self, path: &Path) -> bool {
        let Some(extensions) = &self.extensions else {
            return true;
        };
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&ext.to_ascii_lowercase()))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, relative: &Path) -> bool {
        self.accepts_extension(relative) && !self.excludes.is_match(relative)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
