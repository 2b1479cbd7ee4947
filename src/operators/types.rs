use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Granularity at which an operator reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorLevel {
    /// One value per metric and file
    File,
    /// Per-file values plus a breakdown per sub-file entity
    Object,
}

impl fmt::Display for OperatorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Object => write!(f, "object"),
        }
    }
}

/// Declared type of a metric's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Integer,
    Float,
    Text,
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Which direction of change counts as an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricMeasure {
    /// Lower is better (complexity, size)
    AimLow,
    /// Higher is better (maintainability)
    AimHigh,
    /// No preferred direction
    Informational,
}

/// Descriptor of a single metric produced by an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub name: &'static str,
    pub description: &'static str,
    pub metric_type: MetricType,
    pub measure: MetricMeasure,
}

/// A concrete metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl MetricValue {
    /// Numeric view of the value, if it has one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub const fn metric_type(&self) -> MetricType {
        match self {
            Self::Integer(_) => MetricType::Integer,
            Self::Float(_) => MetricType::Float,
            Self::Text(_) => MetricType::Text,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.2}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<usize> for MetricValue {
    fn from(value: usize) -> Self {
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Separator between file and entity in a target key.
const MODULE_SEPARATOR: char = ':';

/// Key a file (`module == None`) or one of its entities is stored under:
/// `file` or `file:module`.
#[must_use]
pub fn join_target_key(file: &str, module: Option<&str>) -> String {
    match module {
        Some(module) => format!("{file}{MODULE_SEPARATOR}{module}"),
        None => file.to_string(),
    }
}

/// What one operator reports for one file.
///
/// File-level values and per-entity values are kept apart, so no caller has
/// to guess whether a key names a metric or an entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileReport {
    /// Metric name -> file-level value
    pub metrics: BTreeMap<String, MetricValue>,
    /// Entity name -> metric name -> value (empty for `File` operators)
    pub entities: BTreeMap<String, BTreeMap<String, MetricValue>>,
}

impl FileReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_metric(mut self, name: &str, value: impl Into<MetricValue>) -> Self {
        self.metrics.insert(name.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn with_entity_metric(
        mut self,
        entity: &str,
        name: &str,
        value: impl Into<MetricValue>,
    ) -> Self {
        self.entities
            .entry(entity.to_string())
            .or_default()
            .insert(name.to_string(), value.into());
        self
    }

    /// Value of `metric` for the file itself (`module == None`) or for one entity.
    #[must_use]
    pub fn value(&self, module: Option<&str>, metric: &str) -> Option<&MetricValue> {
        match module {
            None => self.metrics.get(metric),
            Some(entity) => self.entities.get(entity)?.get(metric),
        }
    }
}

/// Operator output: file path -> report.
pub type OperatorOutput = BTreeMap<String, FileReport>;

/// A named, stateless metric analyzer.
pub trait Operator: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn level(&self) -> OperatorLevel;

    fn metrics(&self) -> &[Metric];

    fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics().iter().find(|m| m.name == name)
    }

    /// Compute metrics for `files`, given as paths relative to `root`.
    ///
    /// Files the operator cannot analyze are left out of the output.
    ///
    /// # Errors
    /// Returns an error if analysis fails for a reason other than missing data.
    fn run(&self, root: &Path, files: &[String]) -> Result<OperatorOutput>;
}
