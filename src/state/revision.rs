use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::operators::{MetricValue, OperatorOutput, join_target_key};

const HISTORY_VERSION: u32 = 1;

/// Target key -> metric name -> value.
pub type TargetMetrics = BTreeMap<String, BTreeMap<String, MetricValue>>;

/// An immutable snapshot of metrics recorded for one revision.
///
/// Values are stored per operator under a target key, which is either a
/// bare file path or `file:module` for a sub-file entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Revision {
    /// Commit hash (short form) or content hash identifying the revision
    pub key: String,
    /// Archiver the revision was recorded under
    pub archiver: String,
    /// Unix timestamp (seconds since epoch)
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default)]
    operators: BTreeMap<String, TargetMetrics>,
}

impl Revision {
    #[must_use]
    pub fn new(key: impl Into<String>, archiver: impl Into<String>, timestamp: u64) -> Self {
        Self {
            key: key.into(),
            archiver: archiver.into(),
            timestamp,
            branch: None,
            operators: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_branch(mut self, branch: Option<String>) -> Self {
        self.branch = branch;
        self
    }

    /// Recorded value, or `None` if the operator, target or metric is unknown.
    #[must_use]
    pub fn get(&self, operator: &str, target_key: &str, metric: &str) -> Option<&MetricValue> {
        self.operators.get(operator)?.get(target_key)?.get(metric)
    }

    pub fn set(&mut self, operator: &str, target_key: &str, metric: &str, value: MetricValue) {
        self.operators
            .entry(operator.to_string())
            .or_default()
            .entry(target_key.to_string())
            .or_default()
            .insert(metric.to_string(), value);
    }

    /// Store an operator's output, flattening entities into `file:entity` keys.
    pub fn record_output(&mut self, operator: &str, output: &OperatorOutput) {
        let targets = self.operators.entry(operator.to_string()).or_default();
        for (file, report) in output {
            targets.insert(join_target_key(file, None), report.metrics.clone());
            for (entity, metrics) in &report.entities {
                targets.insert(join_target_key(file, Some(entity)), metrics.clone());
            }
        }
    }

    /// Number of distinct target keys across all operators.
    #[must_use]
    pub fn target_count(&self) -> usize {
        let mut keys: Vec<&String> = self.operators.values().flat_map(BTreeMap::keys).collect();
        keys.sort();
        keys.dedup();
        keys.len()
    }
}

/// Revisions of one archiver, newest first.
///
/// File format:
/// ```json
/// {
///   "version": 1,
///   "revisions": [
///     { "key": "a1b2c3d", "archiver": "git", "timestamp": 1234567890, "operators": { ... } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevisionHistory {
    version: u32,
    revisions: Vec<Revision>,
}

impl Default for RevisionHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl RevisionHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version: HISTORY_VERSION,
            revisions: Vec::new(),
        }
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Revision> {
        self.revisions.first()
    }

    #[must_use]
    pub fn revisions(&self) -> &[Revision] {
        &self.revisions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    /// Add a revision as the newest entry.
    ///
    /// A previous revision with the same key is replaced. With
    /// `max_revisions`, the oldest revisions beyond the limit are dropped.
    pub fn push(&mut self, revision: Revision, max_revisions: Option<usize>) {
        self.revisions.retain(|existing| existing.key != revision.key);
        self.revisions.insert(0, revision);
        if let Some(max) = max_revisions {
            self.revisions.truncate(max.max(1));
        }
    }
}

#[cfg(test)]
#[path = "revision_tests.rs"]
mod tests;
