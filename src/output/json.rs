use serde::Serialize;

use crate::diff::{DiffResult, MetricDiffs};
use crate::error::Result;

use super::DiffFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    metrics: Vec<&'a str>,
    results: Vec<TargetResult<'a>>,
}

#[derive(Serialize)]
struct TargetResult<'a> {
    file: &'a str,
    module: Option<&'a str>,
    metrics: &'a MetricDiffs,
}

impl DiffFormatter for JsonFormatter {
    fn format(&self, result: &DiffResult) -> Result<String> {
        let output = JsonOutput {
            metrics: result.metrics().iter().map(|m| m.id.as_str()).collect(),
            results: result
                .targets()
                .map(|(file, module, metrics)| TargetResult {
                    file,
                    module,
                    metrics,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
