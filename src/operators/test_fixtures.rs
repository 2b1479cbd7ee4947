//! Scripted operators for tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{MetricDeltaError, Result};

use super::{Metric, MetricMeasure, MetricType, Operator, OperatorLevel, OperatorOutput};

/// An operator that returns a canned output and counts its executions.
pub struct FakeOperator {
    name: &'static str,
    level: OperatorLevel,
    metrics: Vec<Metric>,
    output: OperatorOutput,
    fail: bool,
    runs: AtomicUsize,
    roots: Mutex<Vec<PathBuf>>,
}

impl FakeOperator {
    pub fn new(name: &'static str, level: OperatorLevel, metric_names: &[&'static str]) -> Self {
        Self {
            name,
            level,
            metrics: metric_names
                .iter()
                .map(|metric| Metric {
                    name: *metric,
                    description: "test metric",
                    metric_type: MetricType::Integer,
                    measure: MetricMeasure::AimLow,
                })
                .collect(),
            output: OperatorOutput::new(),
            fail: false,
            runs: AtomicUsize::new(0),
            roots: Mutex::new(Vec::new()),
        }
    }

    pub fn with_output(mut self, output: OperatorOutput) -> Self {
        self.output = output;
        self
    }

    pub const fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }

    pub fn roots(&self) -> Vec<PathBuf> {
        self.roots.lock().unwrap().clone()
    }
}

impl Operator for FakeOperator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "fake operator"
    }

    fn level(&self) -> OperatorLevel {
        self.level
    }

    fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    fn run(&self, root: &Path, _files: &[String]) -> Result<OperatorOutput> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        self.roots.lock().unwrap().push(root.to_path_buf());
        if self.fail {
            return Err(MetricDeltaError::Config("scripted failure".to_string()));
        }
        Ok(self.output.clone())
    }
}
