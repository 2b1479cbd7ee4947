//! Detection of functions, methods and classes in source files.
//!
//! Parsers are line-oriented and regex based. They report the line span of
//! each entity so that per-entity metrics can be computed over it.

mod parser;
mod types;

pub use parser::{EntityParser, get_parser};
pub use types::CodeEntity;
