//! Rendering of diff results.

mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::OperatorProgress;
pub use text::{ColorMode, TextFormatter};

use crate::diff::DiffResult;
use crate::error::Result;

pub trait DiffFormatter {
    /// Render a diff result.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, result: &DiffResult) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Formatter for `format`; `color` only affects text output.
#[must_use]
pub fn formatter_for(format: OutputFormat, color: ColorMode) -> Box<dyn DiffFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
