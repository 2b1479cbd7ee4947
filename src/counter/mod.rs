//! Line classification behind the `raw` operator.

mod comment;
mod sloc;

pub use comment::CommentDetector;
pub use sloc::{LineKind, LineStats, SlocCounter};
