mod registry;

pub use registry::{CommentSyntax, Language, LanguageRegistry};
