/// A function, method or class detected in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntity {
    /// Qualified name (`Type::method` for Rust impls, `Class.method` for Python)
    pub name: String,
    /// Starting line (1-indexed)
    pub start_line: usize,
    /// Ending line (1-indexed, inclusive)
    pub end_line: usize,
}

impl CodeEntity {
    #[must_use]
    pub const fn new(name: String, start_line: usize, end_line: usize) -> Self {
        Self {
            name,
            start_line,
            end_line,
        }
    }

    /// Zero-based line indices covered by this entity.
    #[must_use]
    pub const fn line_range(&self) -> std::ops::Range<usize> {
        self.start_line.saturating_sub(1)..self.end_line
    }
}
