//! `list-metrics` command.

use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::cli::Cli;
use crate::operators::{MetricMeasure, OperatorRegistry};

#[must_use]
pub fn run_list_metrics(cli: &Cli) -> i32 {
    let output = format_metric_list(&OperatorRegistry::default());
    if !cli.quiet {
        print!("{output}");
    }
    EXIT_SUCCESS
}

const fn measure_label(measure: MetricMeasure) -> &'static str {
    match measure {
        MetricMeasure::AimLow => "lower is better",
        MetricMeasure::AimHigh => "higher is better",
        MetricMeasure::Informational => "informational",
    }
}

/// One block per operator, one line per metric with its qualified identifier,
/// value type and preferred direction.
#[must_use]
pub fn format_metric_list(registry: &OperatorRegistry) -> String {
    let mut output = String::new();
    for operator in registry.all() {
        let _ = writeln!(
            output,
            "{} ({}-level): {}",
            operator.name(),
            operator.level(),
            operator.description()
        );
        for metric in operator.metrics() {
            let id = format!("{}.{}", operator.name(), metric.name);
            let _ = writeln!(
                output,
                "  {id:<24} {} ({}) [{}]",
                metric.description,
                metric.metric_type,
                measure_label(metric.measure)
            );
        }
    }
    output
}
