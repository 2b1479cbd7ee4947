//! The diff engine: compares the metrics of the last recorded revision with
//! metrics computed on the working copy.
//!
//! Data flows resolver -> operator runner (live) + lookup (old) -> expander
//! -> aggregator. Missing data is reported as absent, never as an error.

mod aggregate;
mod expand;
mod lookup;
mod types;

pub use aggregate::aggregate;
pub use expand::expand;
pub use lookup::lookup;
pub use types::{DiffEntry, DiffOptions, DiffResult, DiffTarget, MetricColumn, MetricDiffs};

use std::path::PathBuf;

use indexmap::IndexSet;

use crate::error::Result;
use crate::operators::{OperatorRegistry, run_operators, unique_operators};
use crate::state::RevisionSource;

const LOG_TARGET: &str = "diff";

/// The project a diff runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Absolute project root; every operator resolves files against it
    pub root: PathBuf,
    /// Archiver whose history is compared against
    pub archiver: String,
}

impl Project {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, archiver: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            archiver: archiver.into(),
        }
    }
}

/// Diff `files` on the `metrics` identifiers against the latest revision.
///
/// Identifiers are resolved before anything else runs, so a typo fails
/// fast. Each distinct operator runs once with the project root.
///
/// # Errors
/// Returns `UnknownOperator`/`UnknownMetric` for bad identifiers,
/// `NoRevisions` if the archiver has no history, or `OperatorFailed`.
pub fn compute_diff<S: AsRef<str>>(
    registry: &OperatorRegistry,
    store: &dyn RevisionSource,
    project: &Project,
    files: &[String],
    metrics: &[S],
    options: DiffOptions,
) -> Result<DiffResult> {
    let requested = registry.resolve_metrics(metrics)?;
    let revision = store.last_revision(&project.archiver)?;

    let operators = unique_operators(&requested);
    let live = run_operators(&operators, &project.root, files)?;

    let mut targets: IndexSet<DiffTarget> = files.iter().map(DiffTarget::file).collect();
    targets.extend(expand(&requested, &live, files, options.detail));
    log::debug!(
        target: LOG_TARGET,
        "Comparing {} target(s) on {} metric(s) against {}",
        targets.len(),
        requested.len(),
        revision.key
    );

    Ok(aggregate(
        &targets,
        &requested,
        &revision,
        &live,
        options.changes_only,
    ))
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
