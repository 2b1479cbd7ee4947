use std::sync::Arc;

use crate::error::{MetricDeltaError, Result};
use crate::language::LanguageRegistry;

use super::{CyclomaticOperator, Metric, Operator, OperatorLevel, RawOperator};

/// Separator between operator and metric in a qualified identifier.
const IDENTIFIER_SEPARATOR: char = '.';

/// A metric resolved from a qualified `operator.metric` identifier.
#[derive(Clone, Copy)]
pub struct RequestedMetric<'r> {
    pub operator: &'r dyn Operator,
    pub metric: &'r Metric,
}

impl RequestedMetric<'_> {
    /// Qualified identifier, e.g. `cyclomatic.complexity`.
    #[must_use]
    pub fn id(&self) -> String {
        format!(
            "{}{IDENTIFIER_SEPARATOR}{}",
            self.operator.name(),
            self.metric.name
        )
    }

    #[must_use]
    pub fn operator_name(&self) -> &'static str {
        self.operator.name()
    }

    #[must_use]
    pub fn level(&self) -> OperatorLevel {
        self.operator.level()
    }
}

impl std::fmt::Debug for RequestedMetric<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RequestedMetric").field(&self.id()).finish()
    }
}

/// Split a qualified identifier on its first separator.
///
/// # Errors
/// Returns `UnknownMetric` if the identifier has no separator or an empty half.
pub fn split_identifier(identifier: &str) -> Result<(&str, &str)> {
    match identifier.split_once(IDENTIFIER_SEPARATOR) {
        Some((operator, metric)) if !operator.is_empty() && !metric.is_empty() => {
            Ok((operator, metric))
        }
        _ => Err(MetricDeltaError::UnknownMetric(identifier.to_string())),
    }
}

/// Registry of available operators, looked up by name.
pub struct OperatorRegistry {
    operators: Vec<Box<dyn Operator>>,
}

impl OperatorRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            operators: Vec::new(),
        }
    }

    /// The built-in operators, analyzing files with the given languages.
    #[must_use]
    pub fn with_languages(languages: LanguageRegistry) -> Self {
        let languages = Arc::new(languages);
        let mut registry = Self::new();
        registry.register(Box::new(RawOperator::new(Arc::clone(&languages))));
        registry.register(Box::new(CyclomaticOperator::new(languages)));
        registry
    }

    /// Register an operator. A later operator with the same name replaces the earlier one.
    pub fn register(&mut self, operator: Box<dyn Operator>) {
        self.operators.retain(|existing| existing.name() != operator.name());
        self.operators.push(operator);
    }

    pub fn all(&self) -> impl Iterator<Item = &dyn Operator> {
        self.operators.iter().map(|op| &**op)
    }

    /// Look up an operator by name.
    ///
    /// # Errors
    /// Returns `UnknownOperator` if no operator has that name.
    pub fn resolve_operator(&self, name: &str) -> Result<&dyn Operator> {
        self.all()
            .find(|op| op.name() == name)
            .ok_or_else(|| MetricDeltaError::UnknownOperator(name.to_string()))
    }

    /// Resolve a qualified `operator.metric` identifier.
    ///
    /// # Errors
    /// Returns `UnknownOperator` or `UnknownMetric` if either half does not exist.
    pub fn resolve_metric(&self, identifier: &str) -> Result<RequestedMetric<'_>> {
        let (operator_name, metric_name) = split_identifier(identifier)?;
        let operator = self.resolve_operator(operator_name)?;
        let metric = operator
            .metric(metric_name)
            .ok_or_else(|| MetricDeltaError::UnknownMetric(identifier.to_string()))?;
        Ok(RequestedMetric { operator, metric })
    }

    /// Resolve every identifier, failing on the first unknown one.
    ///
    /// # Errors
    /// Returns the first resolution error.
    pub fn resolve_metrics<S: AsRef<str>>(
        &self,
        identifiers: &[S],
    ) -> Result<Vec<RequestedMetric<'_>>> {
        identifiers
            .iter()
            .map(|id| self.resolve_metric(id.as_ref()))
            .collect()
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::with_languages(LanguageRegistry::default())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
