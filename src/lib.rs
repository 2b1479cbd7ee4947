pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod diff;
pub mod error;
pub mod git;
pub mod language;
pub mod operators;
pub mod output;
pub mod path_utils;
pub mod scanner;
pub mod state;

pub use error::{MetricDeltaError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
