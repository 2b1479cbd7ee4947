use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::operators::{MetricMeasure, MetricValue, join_target_key};

/// A file, or one entity inside a file, being compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiffTarget {
    pub file: String,
    pub module: Option<String>,
}

impl DiffTarget {
    #[must_use]
    pub fn file(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            module: None,
        }
    }

    #[must_use]
    pub fn entity(file: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            module: Some(module.into()),
        }
    }

    /// Key under which revisions store this target: `file` or `file:module`.
    #[must_use]
    pub fn key(&self) -> String {
        join_target_key(&self.file, self.module.as_deref())
    }
}

impl fmt::Display for DiffTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Old and new value of one metric for one target. `None` means absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    pub old: Option<MetricValue>,
    pub new: Option<MetricValue>,
}

impl DiffEntry {
    #[must_use]
    pub const fn new(old: Option<MetricValue>, new: Option<MetricValue>) -> Self {
        Self { old, new }
    }

    /// Absent on both sides is not a change.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.old != self.new
    }
}

/// Metric identifier -> entry, in requested metric order.
pub type MetricDiffs = IndexMap<String, DiffEntry>;

/// A requested metric as it appears in the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricColumn {
    /// Qualified identifier, e.g. `raw.loc`
    pub id: String,
    pub measure: MetricMeasure,
}

/// Result of a diff: file -> module (`None` for the file itself) -> metric diffs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffResult {
    metrics: Vec<MetricColumn>,
    files: BTreeMap<String, BTreeMap<Option<String>, MetricDiffs>>,
}

impl DiffResult {
    #[must_use]
    pub const fn new(metrics: Vec<MetricColumn>) -> Self {
        Self {
            metrics,
            files: BTreeMap::new(),
        }
    }

    /// Requested metrics, in request order.
    #[must_use]
    pub fn metrics(&self) -> &[MetricColumn] {
        &self.metrics
    }

    pub fn insert(&mut self, target: DiffTarget, diffs: MetricDiffs) {
        self.files
            .entry(target.file)
            .or_default()
            .insert(target.module, diffs);
    }

    #[must_use]
    pub fn get(&self, file: &str, module: Option<&str>) -> Option<&MetricDiffs> {
        self.files.get(file)?.get(&module.map(str::to_string))
    }

    #[must_use]
    pub fn entry(&self, file: &str, module: Option<&str>, metric: &str) -> Option<&DiffEntry> {
        self.get(file, module)?.get(metric)
    }

    /// Files present in the result, sorted.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Every target with its diffs; a file's own row precedes its modules.
    pub fn targets(&self) -> impl Iterator<Item = (&str, Option<&str>, &MetricDiffs)> {
        self.files.iter().flat_map(|(file, modules)| {
            modules
                .iter()
                .map(move |(module, diffs)| (file.as_str(), module.as_deref(), diffs))
        })
    }

    /// Number of targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Knobs of a diff run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Drop targets whose metrics all kept their value
    pub changes_only: bool,
    /// Add per-entity targets for object-level metrics
    pub detail: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            changes_only: true,
            detail: true,
        }
    }
}
