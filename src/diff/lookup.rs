use crate::operators::MetricValue;
use crate::state::Revision;

/// Historical value of `metric` for `target_key` as recorded by `operator`.
///
/// Total: anything not recorded is `None`, never an error.
#[must_use]
pub fn lookup(
    revision: &Revision,
    operator: &str,
    target_key: &str,
    metric: &str,
) -> Option<MetricValue> {
    revision.get(operator, target_key, metric).cloned()
}
