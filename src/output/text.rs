use std::cmp::Ordering;
use std::fmt::Write;

use crate::diff::{DiffEntry, DiffResult, MetricColumn};
use crate::error::Result;
use crate::operators::{MetricMeasure, MetricValue, join_target_key};

use super::DiffFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

const TARGET_HEADER: &str = "File";
const ABSENT: &str = "-";
const COLUMN_GAP: &str = "  ";

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn value_text(value: Option<&MetricValue>) -> String {
        value.map_or_else(|| ABSENT.to_string(), ToString::to_string)
    }

    fn cell_text(entry: Option<&DiffEntry>) -> String {
        match entry {
            None => ABSENT.to_string(),
            Some(entry) if entry.is_changed() => format!(
                "{} -> {}",
                Self::value_text(entry.old.as_ref()),
                Self::value_text(entry.new.as_ref())
            ),
            Some(entry) => Self::value_text(entry.new.as_ref()),
        }
    }

    /// Green for an improvement, red for a regression.
    fn cell_color(entry: &DiffEntry, measure: MetricMeasure) -> Option<&'static str> {
        let old = entry.old.as_ref()?.as_f64()?;
        let new = entry.new.as_ref()?.as_f64()?;
        let improved = match (new.partial_cmp(&old)?, measure) {
            (Ordering::Equal, _) | (_, MetricMeasure::Informational) => return None,
            (Ordering::Less, MetricMeasure::AimLow) | (Ordering::Greater, MetricMeasure::AimHigh) => {
                true
            }
            _ => false,
        };
        Some(if improved { ansi::GREEN } else { ansi::RED })
    }

    fn paint(&self, padded: &str, entry: Option<&DiffEntry>, column: &MetricColumn) -> String {
        let color = entry
            .filter(|_| self.use_colors)
            .and_then(|entry| Self::cell_color(entry, column.measure));
        match color {
            Some(color) => format!("{color}{padded}{}", ansi::RESET),
            None => padded.to_string(),
        }
    }
}

impl DiffFormatter for TextFormatter {
    fn format(&self, result: &DiffResult) -> Result<String> {
        if result.is_empty() {
            return Ok("No changes.\n".to_string());
        }

        let columns = result.metrics();
        let rows: Vec<(String, Vec<(String, Option<&DiffEntry>)>)> = result
            .targets()
            .map(|(file, module, diffs)| {
                let label = join_target_key(file, module);
                let cells = columns
                    .iter()
                    .map(|column| {
                        let entry = diffs.get(&column.id);
                        (Self::cell_text(entry), entry)
                    })
                    .collect();
                (label, cells)
            })
            .collect();

        let label_width = rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .chain([TARGET_HEADER.len()])
            .max()
            .unwrap_or_default();
        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                rows.iter()
                    .map(|(_, cells)| cells[i].0.chars().count())
                    .chain([column.id.chars().count()])
                    .max()
                    .unwrap_or_default()
            })
            .collect();

        let mut output = String::new();
        let mut header = format!("{TARGET_HEADER:<label_width$}");
        for (column, width) in columns.iter().zip(&widths) {
            let _ = write!(header, "{COLUMN_GAP}{:>width$}", column.id);
        }
        let _ = writeln!(output, "{}", header.trim_end());

        for (label, cells) in &rows {
            let mut line = format!("{label:<label_width$}");
            for ((text, entry), (column, width)) in cells.iter().zip(columns.iter().zip(&widths)) {
                let padded = format!("{text:>width$}");
                let _ = write!(line, "{COLUMN_GAP}{}", self.paint(&padded, *entry, column));
            }
            let _ = writeln!(output, "{}", line.trim_end());
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
