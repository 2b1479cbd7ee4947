use std::collections::HashMap;
use std::path::Path;
use std::str::Chars;
use std::sync::Arc;

use rayon::prelude::*;
use regex::Regex;

use crate::analyzer::{CodeEntity, get_parser};
use crate::counter::{LineKind, SlocCounter};
use crate::error::Result;
use crate::language::{Language, LanguageRegistry};

use super::{
    FileReport, Metric, MetricMeasure, MetricType, Operator, OperatorLevel, OperatorOutput,
    read_source,
};

const COMPLEXITY: &str = "complexity";

const METRICS: &[Metric] = &[Metric {
    name: COMPLEXITY,
    description: "Cyclomatic complexity",
    metric_type: MetricType::Integer,
    measure: MetricMeasure::AimLow,
}];

/// How string and character literals are written, so that keywords and
/// operators inside them are not counted.
#[derive(Debug, Clone, Copy)]
struct LiteralSyntax {
    /// Delimiters of single-line string literals
    strings: &'static [char],
    /// `'x'` is a character literal (and `'a` a lifetime or label)
    char_literals: bool,
}

/// Decision-point pattern per language, plus its literal syntax.
fn decision_rules(language: &str) -> Option<(&'static str, LiteralSyntax)> {
    let rules = match language {
        "python" => (
            r"\b(?:if|elif|for|while|except|and|or|case)\b",
            LiteralSyntax {
                strings: &['"', '\''],
                char_literals: false,
            },
        ),
        "rust" => (
            r"\b(?:if|for|while)\b|=>|&&|\|\|",
            LiteralSyntax {
                strings: &['"'],
                char_literals: true,
            },
        ),
        "go" => (
            r"\b(?:if|for|case)\b|&&|\|\|",
            LiteralSyntax {
                strings: &['"', '`'],
                char_literals: true,
            },
        ),
        "javascript" | "typescript" => (
            r"\b(?:if|for|while|case|catch)\b|&&|\|\||\?\?",
            LiteralSyntax {
                strings: &['"', '\'', '`'],
                char_literals: false,
            },
        ),
        "c" | "c++" => (
            r"\b(?:if|for|while|case|catch)\b|&&|\|\|",
            LiteralSyntax {
                strings: &['"'],
                char_literals: true,
            },
        ),
        _ => return None,
    };
    Some(rules)
}

/// Counts decision points on one line of code.
struct Decisions {
    pattern: Regex,
    literals: LiteralSyntax,
}

impl Decisions {
    fn count(&self, line: &str) -> usize {
        let code = strip_literals(line, self.literals);
        self.pattern
            .find_iter(&code)
            .filter(|m| match m.as_str() {
                "&&" | "||" => follows_operand(&code[..m.start()]),
                _ => true,
            })
            .count()
    }
}

/// Empty the contents of string and character literals, keeping the quotes.
fn strip_literals(line: &str, syntax: LiteralSyntax) -> String {
    let mut code = String::with_capacity(line.len());
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        code.push(c);
        let is_literal = syntax.strings.contains(&c)
            || (c == '\'' && syntax.char_literals && opens_char_literal(chars.clone()));
        if is_literal && skip_literal(&mut chars, c) {
            code.push(c);
        }
    }

    code
}

/// `'x'` or `'\n'`, as opposed to a lifetime such as `'a`.
fn opens_char_literal(mut rest: Chars<'_>) -> bool {
    match rest.next() {
        Some('\\') => true,
        Some(_) => rest.next() == Some('\''),
        None => false,
    }
}

/// Consume a literal body through its closing `quote`. Returns whether the
/// literal was closed on this line.
fn skip_literal(chars: &mut Chars<'_>, quote: char) -> bool {
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return true;
        }
    }
    false
}

/// A binary `&&`/`||` needs an operand on its left. Without one, `||` opens
/// a closure and `&&` takes a double reference.
fn follows_operand(before: &str) -> bool {
    let before = before.trim_end();
    let ends_with_word = |word: &str| {
        before
            .strip_suffix(word)
            .is_some_and(|rest| !rest.ends_with(|c: char| c.is_alphanumeric() || c == '_'))
    };
    if ends_with_word("move") || ends_with_word("return") {
        return false;
    }
    before
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || matches!(c, '_' | ')' | ']' | '?' | '"' | '\''))
}

/// McCabe complexity per function, method and class.
///
/// An entity scores `1 + decision points` inside its span. Decision points
/// are counted on code lines only, outside string and character literals.
/// The file-level value is the sum over outermost entities.
pub struct CyclomaticOperator {
    languages: Arc<LanguageRegistry>,
    decisions: HashMap<&'static str, Decisions>,
}

impl CyclomaticOperator {
    #[must_use]
    pub fn new(languages: Arc<LanguageRegistry>) -> Self {
        let decisions = ["python", "rust", "go", "javascript", "typescript", "c", "c++"]
            .into_iter()
            .filter_map(|name| {
                let (pattern, literals) = decision_rules(name)?;
                let pattern = Regex::new(pattern).expect("Invalid regex");
                Some((name, Decisions { pattern, literals }))
            })
            .collect();
        Self {
            languages,
            decisions,
        }
    }

    fn analyze(&self, root: &Path, file: &str) -> Result<Option<FileReport>> {
        let Some(language) = self.languages.detect(Path::new(file)) else {
            return Ok(None);
        };
        let (Some(parser), Some(decisions)) = (
            get_parser(&language.name),
            self.decisions.get(language.name.to_lowercase().as_str()),
        ) else {
            return Ok(None);
        };
        let Some(source) = read_source(root, file)? else {
            return Ok(None);
        };

        let entities = parser.parse(&source);
        let scores = score_entities(&source, language, decisions, &entities);

        let mut report = FileReport::new();
        let mut total = 0usize;
        for (index, (entity, score)) in entities.iter().zip(&scores).enumerate() {
            if is_outermost(&entities, index) {
                total += score;
            }
            let name = unique_name(&report, entity);
            report = report.with_entity_metric(&name, COMPLEXITY, *score);
        }

        Ok(Some(report.with_metric(COMPLEXITY, total)))
    }
}

fn score_entities(
    source: &str,
    language: &Language,
    decisions: &Decisions,
    entities: &[CodeEntity],
) -> Vec<usize> {
    let lines: Vec<&str> = source.lines().collect();
    let kinds = SlocCounter::new(&language.comment_syntax).classify(source);

    let per_line: Vec<usize> = lines
        .iter()
        .zip(&kinds)
        .map(|(line, kind)| match kind {
            LineKind::Code => decisions.count(line),
            LineKind::Comment | LineKind::Blank => 0,
        })
        .collect();

    entities
        .iter()
        .map(|entity| {
            let range = entity.line_range();
            let end = range.end.min(per_line.len());
            let start = range.start.min(end);
            1 + per_line[start..end].iter().sum::<usize>()
        })
        .collect()
}

fn is_outermost(entities: &[CodeEntity], index: usize) -> bool {
    let entity = &entities[index];
    !entities.iter().enumerate().any(|(other_index, other)| {
        other_index != index
            && other.start_line < entity.start_line
            && entity.end_line <= other.end_line
    })
}

/// Disambiguate repeated names (overloads, redefinitions) by start line.
fn unique_name(report: &FileReport, entity: &CodeEntity) -> String {
    if report.entities.contains_key(&entity.name) {
        format!("{}#{}", entity.name, entity.start_line)
    } else {
        entity.name.clone()
    }
}

impl Operator for CyclomaticOperator {
    fn name(&self) -> &'static str {
        "cyclomatic"
    }

    fn description(&self) -> &'static str {
        "Cyclomatic complexity of functions, methods and classes"
    }

    fn level(&self) -> OperatorLevel {
        OperatorLevel::Object
    }

    fn metrics(&self) -> &[Metric] {
        METRICS
    }

    fn run(&self, root: &Path, files: &[String]) -> Result<OperatorOutput> {
        let reports: Vec<_> = files
            .par_iter()
            .map(|file| Ok(self.analyze(root, file)?.map(|report| (file.clone(), report))))
            .collect::<Result<_>>()?;

        Ok(reports.into_iter().flatten().collect())
    }
}

#[cfg(test)]
#[path = "cyclomatic_tests.rs"]
mod tests;
