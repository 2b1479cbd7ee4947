use crate::operators::{LiveMetrics, RequestedMetric};
use crate::state::Revision;

use super::{DiffEntry, DiffResult, DiffTarget, MetricColumn, MetricDiffs, lookup};

/// Compare every target on every requested metric.
///
/// With `changes_only`, a target is kept only if at least one of its
/// metrics changed. Targets with no data on either side are still compared
/// (absent against absent).
#[must_use]
pub fn aggregate<'t>(
    targets: impl IntoIterator<Item = &'t DiffTarget>,
    requested: &[RequestedMetric<'_>],
    revision: &Revision,
    live: &LiveMetrics,
    changes_only: bool,
) -> DiffResult {
    let columns = requested
        .iter()
        .map(|m| MetricColumn {
            id: m.id(),
            measure: m.metric.measure,
        })
        .collect();
    let mut result = DiffResult::new(columns);

    for target in targets {
        let key = target.key();
        let mut diffs = MetricDiffs::new();
        let mut changed = false;

        for metric in requested {
            let operator = metric.operator_name();
            let entry = DiffEntry::new(
                lookup(revision, operator, &key, metric.metric.name),
                live.value(
                    operator,
                    &target.file,
                    target.module.as_deref(),
                    metric.metric.name,
                )
                .cloned(),
            );
            changed |= entry.is_changed();
            diffs.insert(metric.id(), entry);
        }

        if changed || !changes_only {
            result.insert(target.clone(), diffs);
        }
    }

    result
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
