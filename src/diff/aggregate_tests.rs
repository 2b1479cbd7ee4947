use indexmap::IndexSet;

use super::*;
use crate::operators::test_fixtures::FakeOperator;
use crate::operators::{FileReport, MetricValue, Operator, OperatorLevel, OperatorOutput};

fn requested<'a>(op: &'a FakeOperator, metric: &str) -> RequestedMetric<'a> {
    RequestedMetric {
        operator: op,
        metric: op.metric(metric).unwrap(),
    }
}

fn revision() -> Revision {
    let mut rev = Revision::new("abc1234", "git", 1_700_000_000);
    rev.set("raw", "a.py", "loc", MetricValue::Integer(10));
    rev.set("raw", "a.py", "sloc", MetricValue::Integer(8));
    rev.set("raw", "same.py", "loc", MetricValue::Integer(3));
    rev.set("raw", "same.py", "sloc", MetricValue::Integer(2));
    rev
}

fn live() -> LiveMetrics {
    let mut live = LiveMetrics::new();
    live.insert(
        "raw",
        OperatorOutput::from([
            (
                "a.py".to_string(),
                FileReport::new().with_metric("loc", 12_i64).with_metric("sloc", 8_i64),
            ),
            (
                "same.py".to_string(),
                FileReport::new().with_metric("loc", 3_i64).with_metric("sloc", 2_i64),
            ),
        ]),
    );
    live
}

fn targets(files: &[&str]) -> IndexSet<DiffTarget> {
    files.iter().map(|f| DiffTarget::file(*f)).collect()
}

#[test]
fn records_every_requested_metric_of_a_changed_target() {
    let op = FakeOperator::new("raw", OperatorLevel::File, &["loc", "sloc"]);
    let metrics = [requested(&op, "loc"), requested(&op, "sloc")];

    let result = aggregate(&targets(&["a.py"]), &metrics, &revision(), &live(), true);

    let diffs = result.get("a.py", None).unwrap();
    let ids: Vec<&str> = diffs.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["raw.loc", "raw.sloc"]);
    assert_eq!(
        diffs["raw.loc"],
        DiffEntry::new(Some(MetricValue::Integer(10)), Some(MetricValue::Integer(12)))
    );
    assert!(!diffs["raw.sloc"].is_changed());
}

#[test]
fn changes_only_keeps_exactly_the_changed_targets() {
    let op = FakeOperator::new("raw", OperatorLevel::File, &["loc", "sloc"]);
    let metrics = [requested(&op, "loc"), requested(&op, "sloc")];
    let all = targets(&["a.py", "same.py"]);

    let filtered = aggregate(&all, &metrics, &revision(), &live(), true);
    let files: Vec<&str> = filtered.files().collect();
    assert_eq!(files, vec!["a.py"]);

    let unfiltered = aggregate(&all, &metrics, &revision(), &live(), false);
    assert_eq!(unfiltered.len(), 2);
    for (file, module, diffs) in unfiltered.targets() {
        let changed = diffs.values().any(DiffEntry::is_changed);
        assert_eq!(changed, filtered.get(file, module).is_some());
    }
}

#[test]
fn unknown_target_is_absent_on_both_sides() {
    let op = FakeOperator::new("raw", OperatorLevel::File, &["loc"]);
    let metrics = [requested(&op, "loc")];
    let unknown = targets(&["nowhere.py"]);

    let filtered = aggregate(&unknown, &metrics, &revision(), &live(), true);
    assert!(filtered.is_empty());

    let unfiltered = aggregate(&unknown, &metrics, &revision(), &live(), false);
    assert_eq!(
        unfiltered.entry("nowhere.py", None, "raw.loc"),
        Some(&DiffEntry::new(None, None))
    );
}

#[test]
fn entity_targets_use_their_module_key() {
    let op = FakeOperator::new("cyclomatic", OperatorLevel::Object, &["complexity"]);
    let metrics = [requested(&op, "complexity")];
    let mut rev = Revision::new("abc1234", "git", 0);
    rev.set("cyclomatic", "c.py:foo", "complexity", MetricValue::Integer(2));
    let mut live = LiveMetrics::new();
    live.insert(
        "cyclomatic",
        OperatorOutput::from([(
            "c.py".to_string(),
            FileReport::new()
                .with_metric("complexity", 3_i64)
                .with_entity_metric("foo", "complexity", 3_i64),
        )]),
    );

    let all: IndexSet<DiffTarget> = [DiffTarget::file("c.py"), DiffTarget::entity("c.py", "foo")]
        .into_iter()
        .collect();
    let result = aggregate(&all, &metrics, &rev, &live, true);

    assert_eq!(
        result.entry("c.py", Some("foo"), "cyclomatic.complexity"),
        Some(&DiffEntry::new(
            Some(MetricValue::Integer(2)),
            Some(MetricValue::Integer(3))
        ))
    );
    assert_eq!(
        result.entry("c.py", None, "cyclomatic.complexity"),
        Some(&DiffEntry::new(None, Some(MetricValue::Integer(3))))
    );
}

#[test]
fn result_lists_requested_columns() {
    let op = FakeOperator::new("raw", OperatorLevel::File, &["loc", "sloc"]);
    let metrics = [requested(&op, "sloc"), requested(&op, "loc")];

    let result = aggregate(&targets(&[]), &metrics, &revision(), &live(), true);
    let ids: Vec<&str> = result.metrics().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["raw.sloc", "raw.loc"]);
}
