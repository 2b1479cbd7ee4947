use super::*;

fn rust_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//", "///", "//!"], vec![("/*", "*/")])
}

fn python_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\""), ("'''", "'''")])
}

/// (total, code, comment, blank)
fn tally(syntax: &CommentSyntax, source: &str) -> (usize, usize, usize, usize) {
    let stats = SlocCounter::new(syntax).count(source);
    (stats.total, stats.code, stats.comment, stats.blank)
}

#[test]
fn empty_source_counts_nothing() {
    assert_eq!(tally(&rust_syntax(), ""), (0, 0, 0, 0));
    assert_eq!(LineStats::default().sloc(), 0);
}

#[test]
fn rust_lines_are_classified() {
    let syntax = rust_syntax();

    assert_eq!(tally(&syntax, "fn main() {\n    run();\n}"), (3, 3, 0, 0));
    assert_eq!(tally(&syntax, "fn main() {\n\n    run();\n\n}"), (5, 3, 0, 2));
    assert_eq!(tally(&syntax, "// lead\nfn main() {\n    /// doc\n}"), (4, 2, 2, 0));
}

#[test]
fn block_comment_runs_until_its_terminator() {
    let source = "/*\n * header\n */\nfn main() {}\n/* inline */\n";
    assert_eq!(tally(&rust_syntax(), source), (5, 1, 4, 0));
}

#[test]
fn code_with_trailing_comment_is_code() {
    let source = "let x = 1; // set x\nlet y = 2; /* and y */";
    assert_eq!(tally(&rust_syntax(), source), (2, 2, 0, 0));
}

#[test]
fn python_docstrings_count_as_comments() {
    let syntax = python_syntax();

    let spanning = "def f():\n    \"\"\"\n    Docs.\n    \"\"\"\n    return 1\n";
    assert_eq!(tally(&syntax, spanning), (5, 2, 3, 0));

    let one_line = "\"\"\"Module docs.\"\"\"\nimport os\n";
    assert_eq!(tally(&syntax, one_line), (2, 1, 1, 0));
}

#[test]
fn sloc_is_code_lines() {
    let stats = SlocCounter::new(&python_syntax()).count("# c\n\nx = 1\ny = 2\n");
    assert_eq!(stats.sloc(), 2);
    assert_eq!(stats.total, stats.code + stats.comment + stats.blank);
}

#[test]
fn classify_preserves_line_order() {
    let syntax = python_syntax();
    let kinds = SlocCounter::new(&syntax).classify("# c\n\nx = 1\n");

    assert_eq!(kinds, vec![LineKind::Comment, LineKind::Blank, LineKind::Code]);
}
