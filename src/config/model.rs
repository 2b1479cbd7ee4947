use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Archiver used when none is configured.
pub const DEFAULT_ARCHIVER: &str = "git";

/// Top-level `.metric-delta.toml` structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub diff: DiffConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Extra languages, or overrides of built-in ones, by name.
    #[serde(default)]
    pub languages: HashMap<String, CustomLanguageConfig>,
}

/// `[project]`: where revisions are recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Named history that snapshots are recorded into and diffs compare against.
    #[serde(default = "default_archiver")]
    pub archiver: String,

    /// Keep at most this many revisions per archiver.
    #[serde(default)]
    pub max_revisions: Option<usize>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            archiver: default_archiver(),
            max_revisions: None,
        }
    }
}

/// `[diff]`: defaults for the `diff` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DiffConfig {
    /// Qualified `operator.metric` identifiers.
    #[serde(default = "default_metrics")]
    pub metrics: Vec<String>,

    #[serde(default = "default_true")]
    pub changes_only: bool,

    #[serde(default = "default_true")]
    pub detail: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            metrics: default_metrics(),
            changes_only: true,
            detail: true,
        }
    }
}

/// `[scanner]`: which files a directory expands to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// Extensions to analyze. Empty means every extension a known language claims.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Glob patterns of files and directories to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            extensions: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

/// `[languages.<name>]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub single_line_comments: Vec<String>,

    #[serde(default)]
    pub multi_line_comments: Vec<(String, String)>,
}

fn default_archiver() -> String {
    DEFAULT_ARCHIVER.to_string()
}

fn default_metrics() -> Vec<String> {
    vec![
        "raw.loc".to_string(),
        "raw.sloc".to_string(),
        "cyclomatic.complexity".to_string(),
    ]
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
