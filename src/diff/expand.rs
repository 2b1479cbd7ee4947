use indexmap::IndexSet;

use crate::operators::{LiveMetrics, OperatorLevel, RequestedMetric};

use super::DiffTarget;

const LOG_TARGET: &str = "diff";

/// Entity targets discovered in the live metrics for object-level metrics.
///
/// Only `files` are inspected. A file the operator reported nothing for
/// contributes no targets.
#[must_use]
pub fn expand(
    requested: &[RequestedMetric<'_>],
    live: &LiveMetrics,
    files: &[String],
    detail: bool,
) -> IndexSet<DiffTarget> {
    let mut targets = IndexSet::new();
    if !detail {
        return targets;
    }

    for metric in requested
        .iter()
        .filter(|m| m.level() == OperatorLevel::Object)
    {
        let operator = metric.operator_name();
        for file in files {
            let Some(report) = live.file(operator, file) else {
                log::debug!(target: LOG_TARGET, "{operator} has no data for {file}");
                continue;
            };
            targets.extend(
                report
                    .entities
                    .keys()
                    .map(|entity| DiffTarget::entity(file.as_str(), entity.as_str())),
            );
        }
    }

    targets
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
