use super::CommentDetector;
use crate::language::CommentSyntax;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    #[must_use]
    pub const fn sloc(&self) -> usize {
        self.code
    }
}

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Comment,
    Blank,
}

pub struct SlocCounter<'a> {
    detector: CommentDetector<'a>,
}

impl<'a> SlocCounter<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            detector: CommentDetector::new(syntax),
        }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> LineStats {
        let mut stats = LineStats::new();
        for kind in self.classify(source) {
            stats.total += 1;
            match kind {
                LineKind::Code => stats.code += 1,
                LineKind::Comment => stats.comment += 1,
                LineKind::Blank => stats.blank += 1,
            }
        }
        stats
    }

    /// Classify every line of `source`, in order.
    #[must_use]
    pub fn classify(&self, source: &str) -> Vec<LineKind> {
        let mut kinds = Vec::new();
        let mut multi_line_end: Option<&str> = None;

        for line in source.lines() {
            let trimmed = line.trim();

            if let Some(end) = multi_line_end {
                if CommentDetector::contains_multi_line_end(trimmed, end, 0) {
                    multi_line_end = None;
                }
                kinds.push(LineKind::Comment);
                continue;
            }

            if trimmed.is_empty() {
                kinds.push(LineKind::Blank);
                continue;
            }

            if self.detector.is_single_line_comment(trimmed) {
                kinds.push(LineKind::Comment);
                continue;
            }

            if let Some((start, end)) = self.detector.find_multi_line_start(trimmed) {
                if !CommentDetector::contains_multi_line_end(trimmed, end, start.len()) {
                    multi_line_end = Some(end);
                }
                kinds.push(LineKind::Comment);
                continue;
            }

            kinds.push(LineKind::Code);
        }

        kinds
    }
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;
