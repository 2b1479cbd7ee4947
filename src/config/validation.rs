//! Semantic checks that parsing alone cannot express.

use crate::error::{MetricDeltaError, Result};
use crate::operators::split_identifier;

use super::Config;

/// Validate a parsed configuration.
///
/// # Errors
/// Returns `Config` for out-of-range values and `InvalidPattern` for bad globs.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_project_section(config)?;
    validate_diff_section(config)?;
    validate_glob_patterns(config)?;
    validate_languages(config)?;
    Ok(())
}

fn validate_project_section(config: &Config) -> Result<()> {
    let archiver = &config.project.archiver;
    // Archiver names become state file names.
    if archiver.is_empty()
        || !archiver
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MetricDeltaError::Config(format!(
            "project.archiver must be a non-empty name of letters, digits, '-' or '_', got '{archiver}'"
        )));
    }

    if config.project.max_revisions == Some(0) {
        return Err(MetricDeltaError::Config(
            "project.max_revisions must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_diff_section(config: &Config) -> Result<()> {
    if config.diff.metrics.is_empty() {
        return Err(MetricDeltaError::Config(
            "diff.metrics must name at least one metric".to_string(),
        ));
    }
    for identifier in &config.diff.metrics {
        split_identifier(identifier).map_err(|_| {
            MetricDeltaError::Config(format!(
                "diff.metrics entry '{identifier}' is not of the form operator.metric"
            ))
        })?;
    }
    Ok(())
}

fn validate_glob_patterns(config: &Config) -> Result<()> {
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| MetricDeltaError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_languages(config: &Config) -> Result<()> {
    for (name, language) in &config.languages {
        if language.extensions.is_empty() {
            return Err(MetricDeltaError::Config(format!(
                "languages.{name} must list at least one extension"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
