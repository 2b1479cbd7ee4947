use super::*;
use crate::diff::{DiffTarget, MetricDiffs};

fn column(id: &str, measure: MetricMeasure) -> MetricColumn {
    MetricColumn {
        id: id.to_string(),
        measure,
    }
}

fn entry(old: Option<i64>, new: Option<i64>) -> DiffEntry {
    DiffEntry::new(old.map(MetricValue::Integer), new.map(MetricValue::Integer))
}

fn sample() -> DiffResult {
    let mut result = DiffResult::new(vec![
        column("raw.loc", MetricMeasure::AimLow),
        column("cyclomatic.complexity", MetricMeasure::AimLow),
    ]);
    result.insert(
        DiffTarget::file("a.py"),
        MetricDiffs::from([
            ("raw.loc".to_string(), entry(Some(10), Some(12))),
            ("cyclomatic.complexity".to_string(), entry(Some(5), Some(5))),
        ]),
    );
    result.insert(
        DiffTarget::entity("a.py", "foo"),
        MetricDiffs::from([
            ("raw.loc".to_string(), entry(None, None)),
            ("cyclomatic.complexity".to_string(), entry(None, Some(3))),
        ]),
    );
    result
}

#[test]
fn empty_result_says_no_changes() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&DiffResult::default())
        .unwrap();
    assert_eq!(output, "No changes.\n");
}

#[test]
fn renders_header_and_one_row_per_target() {
    let output = TextFormatter::new(ColorMode::Never).format(&sample()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("File"));
    assert!(lines[0].contains("raw.loc"));
    assert!(lines[0].ends_with("cyclomatic.complexity"));
    assert!(lines[1].starts_with("a.py "));
    assert!(lines[2].starts_with("a.py:foo"));
}

#[test]
fn changed_cells_show_old_and_new() {
    let output = TextFormatter::new(ColorMode::Never).format(&sample()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[1].contains("10 -> 12"));
    // Unchanged values are shown once.
    assert!(lines[1].trim_end().ends_with(" 5"));
    assert!(lines[2].contains("- -> 3"));
}

#[test]
fn absent_on_both_sides_renders_dash() {
    let output = TextFormatter::new(ColorMode::Never).format(&sample()).unwrap();
    let row = output.lines().nth(2).unwrap();

    let cells: Vec<&str> = row.split_whitespace().collect();
    assert_eq!(cells[1], "-");
}

#[test]
fn columns_are_aligned() {
    let output = TextFormatter::new(ColorMode::Never).format(&sample()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    let header_end = lines[0].find("raw.loc").unwrap() + "raw.loc".len();
    let row_end = lines[1].find("10 -> 12").unwrap() + "10 -> 12".len();
    assert_eq!(header_end, row_end);
}

#[test]
fn never_mode_emits_no_escape_codes() {
    let output = TextFormatter::new(ColorMode::Never).format(&sample()).unwrap();
    assert!(!output.contains("\x1b["));
}

#[test]
fn regressions_are_red_and_improvements_green() {
    assert_eq!(
        TextFormatter::cell_color(&entry(Some(10), Some(12)), MetricMeasure::AimLow),
        Some(ansi::RED)
    );
    assert_eq!(
        TextFormatter::cell_color(&entry(Some(10), Some(8)), MetricMeasure::AimLow),
        Some(ansi::GREEN)
    );
    assert_eq!(
        TextFormatter::cell_color(&entry(Some(10), Some(12)), MetricMeasure::AimHigh),
        Some(ansi::GREEN)
    );
    assert_eq!(
        TextFormatter::cell_color(&entry(Some(10), Some(12)), MetricMeasure::Informational),
        None
    );
}

#[test]
fn absent_or_unchanged_values_are_not_colored() {
    assert_eq!(
        TextFormatter::cell_color(&entry(None, Some(3)), MetricMeasure::AimLow),
        None
    );
    assert_eq!(
        TextFormatter::cell_color(&entry(Some(3), Some(3)), MetricMeasure::AimLow),
        None
    );
}

#[test]
fn always_mode_colors_changed_cells() {
    let output = TextFormatter::new(ColorMode::Always).format(&sample()).unwrap();
    let row = output.lines().nth(1).unwrap();

    assert!(row.contains(ansi::RED));
    assert!(row.contains(ansi::RESET));
}
