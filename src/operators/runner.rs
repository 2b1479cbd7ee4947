use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{MetricDeltaError, Result};

use super::{FileReport, MetricValue, Operator, OperatorOutput, RequestedMetric};

const LOG_TARGET: &str = "operators";

/// Metrics computed on the working copy: operator -> file -> report.
///
/// Built once per invocation and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveMetrics {
    operators: BTreeMap<String, OperatorOutput>,
}

impl LiveMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, operator: &str, output: OperatorOutput) {
        self.operators.insert(operator.to_string(), output);
    }

    #[must_use]
    pub fn operator(&self, operator: &str) -> Option<&OperatorOutput> {
        self.operators.get(operator)
    }

    #[must_use]
    pub fn file(&self, operator: &str, file: &str) -> Option<&FileReport> {
        self.operator(operator)?.get(file)
    }

    /// Live value for a file (`module == None`) or one of its entities.
    #[must_use]
    pub fn value(
        &self,
        operator: &str,
        file: &str,
        module: Option<&str>,
        metric: &str,
    ) -> Option<&MetricValue> {
        self.file(operator, file)?.value(module, metric)
    }
}

/// Distinct operators behind the requested metrics, in first-seen order.
#[must_use]
pub fn unique_operators<'r>(requested: &[RequestedMetric<'r>]) -> Vec<&'r dyn Operator> {
    let mut seen: IndexMap<&'static str, &'r dyn Operator> = IndexMap::new();
    for metric in requested {
        seen.entry(metric.operator.name()).or_insert(metric.operator);
    }
    seen.into_values().collect()
}

/// Run a single operator against `files`.
///
/// Values for metrics the operator does not declare, or whose type differs
/// from the declared one, are dropped with a warning and read as absent.
///
/// # Errors
/// Returns `OperatorFailed` naming the operator.
pub fn run_operator(
    operator: &dyn Operator,
    root: &Path,
    files: &[String],
) -> Result<OperatorOutput> {
    let name = operator.name();
    log::debug!(target: LOG_TARGET, "Running {name} operator");
    let mut output = operator
        .run(root, files)
        .map_err(|e| MetricDeltaError::operator_failed(name, e))?;

    for (file, report) in &mut output {
        report
            .metrics
            .retain(|metric, value| is_declared(operator, file, metric, value));
        for metrics in report.entities.values_mut() {
            metrics.retain(|metric, value| is_declared(operator, file, metric, value));
        }
    }

    log::debug!(target: LOG_TARGET, "{name} reported {} file(s)", output.len());
    Ok(output)
}

fn is_declared(operator: &dyn Operator, file: &str, metric: &str, value: &MetricValue) -> bool {
    let declared = operator.metric(metric).map(|m| m.metric_type);
    if declared == Some(value.metric_type()) {
        return true;
    }
    log::warn!(
        target: LOG_TARGET,
        "Dropping {}.{metric} = {value} for {file} (declared type: {})",
        operator.name(),
        declared.map_or_else(|| "undeclared".to_string(), |t| t.to_string())
    );
    false
}

/// Execute each distinct operator once against `files`.
///
/// The project root is handed to every operator; the process working
/// directory is never changed. The first failing operator aborts the run.
///
/// # Errors
/// Returns `OperatorFailed` naming the operator that failed.
pub fn run_operators(
    operators: &[&dyn Operator],
    root: &Path,
    files: &[String],
) -> Result<LiveMetrics> {
    let mut live = LiveMetrics::new();

    for operator in operators {
        let name = operator.name();
        if live.operator(name).is_none() {
            live.insert(name, run_operator(*operator, root, files)?);
        }
    }

    Ok(live)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
