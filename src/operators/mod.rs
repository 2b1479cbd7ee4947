//! Metric operators: pluggable analyzers that compute raw metric values for
//! a set of files.
//!
//! Every operator declares a [`OperatorLevel`]. `File` operators report one
//! value per metric and file. `Object` operators additionally report a
//! breakdown per sub-file entity (function, method, class) through
//! [`FileReport::entities`].

mod cyclomatic;
mod raw;
mod registry;
mod runner;
mod types;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use cyclomatic::CyclomaticOperator;
pub use raw::RawOperator;
pub use registry::{OperatorRegistry, RequestedMetric, split_identifier};
pub use runner::{LiveMetrics, run_operator, run_operators, unique_operators};
pub use types::{
    FileReport, Metric, MetricMeasure, MetricType, MetricValue, Operator,
    OperatorLevel, OperatorOutput, join_target_key,
};

use std::path::Path;

use crate::error::{MetricDeltaError, Result};

/// Read a target file relative to the project root.
///
/// A file that no longer exists or is not valid UTF-8 yields `Ok(None)`:
/// the operator simply reports nothing for it.
pub(crate) fn read_source(root: &Path, file: &str) -> Result<Option<String>> {
    let path = root.join(file);
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(Some(content)),
        Err(e)
            if matches!(
                e.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::InvalidData
            ) =>
        {
            log::debug!("Skipping {file}: {e}");
            Ok(None)
        }
        Err(e) => Err(MetricDeltaError::FileRead { path, source: e }),
    }
}
