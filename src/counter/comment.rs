use crate::language::CommentSyntax;

/// Recognizes comment markers for one language.
pub struct CommentDetector<'a> {
    syntax: &'a CommentSyntax,
}

impl<'a> CommentDetector<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax }
    }

    #[must_use]
    pub fn is_single_line_comment(&self, trimmed: &str) -> bool {
        self.syntax
            .single_line
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }

    /// Find a multi-line comment opening at the start of `trimmed`.
    ///
    /// Returns the `(start, end)` markers. Openers in the middle of a line
    /// (after code) do not make the line a comment line.
    #[must_use]
    pub fn find_multi_line_start(&self, trimmed: &str) -> Option<(&'a str, &'a str)> {
        self.syntax
            .multi_line
            .iter()
            .find(|(start, _)| trimmed.starts_with(start.as_str()))
            .map(|(start, end)| (start.as_str(), end.as_str()))
    }

    /// Whether `end` closes the comment on this line.
    ///
    /// `skip` is the number of leading bytes that belong to the opener
    /// (so `"""` is not closed by its own opening quotes).
    #[must_use]
    pub fn contains_multi_line_end(line: &str, end: &str, skip: usize) -> bool {
        line.get(skip..).is_some_and(|rest| rest.contains(end))
    }
}
