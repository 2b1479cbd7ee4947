use regex::Regex;

use super::types::CodeEntity;

/// Trait for language-specific entity detection.
pub trait EntityParser: Send + Sync {
    /// Parse content and return the detected entities in source order.
    fn parse(&self, content: &str) -> Vec<CodeEntity>;
}

fn capture_name(caps: &regex::Captures<'_>, group: usize) -> String {
    caps.get(group).map_or("", |m| m.as_str()).to_string()
}

/// Rust function parser. Functions inside `impl` blocks are reported as
/// `Type::name` methods.
pub struct RustParser {
    fn_pattern: Regex,
    impl_pattern: Regex,
}

impl Default for RustParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RustParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_pattern: Regex::new(
                r"^[\t ]*(pub(?:\s*\([^)]*\))?\s+)?(const\s+)?(async\s+)?(unsafe\s+)?(extern\s+\S+\s+)?fn\s+([a-zA-Z_][a-zA-Z0-9_]*)",
            )
            .expect("Invalid regex"),
            impl_pattern: Regex::new(
                r"^[\t ]*(?:unsafe\s+)?impl(?:\s*<[^>]*>)?\s+(?:[\w:]+(?:<[^>]*>)?\s+for\s+)?([a-zA-Z_][a-zA-Z0-9_]*)",
            )
            .expect("Invalid regex"),
        }
    }
}

impl EntityParser for RustParser {
    fn parse(&self, content: &str) -> Vec<CodeEntity> {
        let lines: Vec<&str> = content.lines().collect();

        let impls: Vec<(String, usize, usize)> = lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let caps = self.impl_pattern.captures(line)?;
                Some((capture_name(&caps, 1), i + 1, find_block_end(&lines, i)))
            })
            .collect();

        let mut entities = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let Some(caps) = self.fn_pattern.captures(line) else {
                continue;
            };
            let name = capture_name(&caps, 6);
            let start_line = i + 1;
            let end_line = find_block_end(&lines, i);

            // Innermost enclosing impl wins.
            let owner = impls
                .iter()
                .filter(|(_, start, end)| *start < start_line && start_line <= *end)
                .max_by_key(|(_, start, _)| *start);

            let entity = match owner {
                Some((ty, _, _)) => {
                    CodeEntity::new(format!("{ty}::{name}"), start_line, end_line)
                }
                None => CodeEntity::new(name, start_line, end_line),
            };
            entities.push(entity);
        }

        entities
    }
}

/// Go function parser. Methods are reported as `Receiver.name`.
pub struct GoParser {
    fn_pattern: Regex,
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GoParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_pattern: Regex::new(
                r"^func\s+(?:\((?:\s*[a-zA-Z_][a-zA-Z0-9_]*\s+)?\*?\s*([a-zA-Z_][a-zA-Z0-9_]*)(?:\[[^\]]*\])?\s*\)\s*)?([a-zA-Z_][a-zA-Z0-9_]*)",
            )
            .expect("Invalid regex"),
        }
    }
}

impl EntityParser for GoParser {
    fn parse(&self, content: &str) -> Vec<CodeEntity> {
        let lines: Vec<&str> = content.lines().collect();
        let mut entities = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let Some(caps) = self.fn_pattern.captures(line) else {
                continue;
            };
            let name = capture_name(&caps, 2);
            let end_line = find_block_end(&lines, i);
            let entity = match caps.get(1) {
                Some(receiver) => {
                    CodeEntity::new(format!("{}.{name}", receiver.as_str()), i + 1, end_line)
                }
                None => CodeEntity::new(name, i + 1, end_line),
            };
            entities.push(entity);
        }

        entities
    }
}

/// Python parser: top-level functions and classes, plus the methods
/// directly inside top-level classes (as `Class.method`).
pub struct PythonParser {
    fn_pattern: Regex,
    class_pattern: Regex,
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

struct OpenClass {
    name: String,
    end_line: usize,
    method_indent: Option<usize>,
}

impl PythonParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_pattern: Regex::new(r"^(\s*)(?:async\s+)?def\s+([a-zA-Z_][a-zA-Z0-9_]*)")
                .expect("Invalid regex"),
            class_pattern: Regex::new(r"^(\s*)class\s+([a-zA-Z_][a-zA-Z0-9_]*)")
                .expect("Invalid regex"),
        }
    }

    fn indent_level(indent: &str) -> usize {
        indent.chars().take_while(|c| c.is_whitespace()).count()
    }
}

impl EntityParser for PythonParser {
    fn parse(&self, content: &str) -> Vec<CodeEntity> {
        let lines: Vec<&str> = content.lines().collect();
        let mut entities = Vec::new();
        let mut open_class: Option<OpenClass> = None;

        for (i, line) in lines.iter().enumerate() {
            if open_class.as_ref().is_some_and(|class| i >= class.end_line) {
                open_class = None;
            }

            if let Some(caps) = self.class_pattern.captures(line) {
                if Self::indent_level(&capture_name(&caps, 1)) == 0 {
                    let name = capture_name(&caps, 2);
                    let end_line = find_python_block_end(&lines, i, 0);
                    entities.push(CodeEntity::new(name.clone(), i + 1, end_line));
                    open_class = Some(OpenClass {
                        name,
                        end_line,
                        method_indent: None,
                    });
                }
                continue;
            }

            let Some(caps) = self.fn_pattern.captures(line) else {
                continue;
            };
            let indent = Self::indent_level(&capture_name(&caps, 1));
            let name = capture_name(&caps, 2);
            let end_line = find_python_block_end(&lines, i, indent);

            if indent == 0 {
                entities.push(CodeEntity::new(name, i + 1, end_line));
            } else if let Some(class) = open_class.as_mut()
                && *class.method_indent.get_or_insert(indent) == indent
            {
                entities.push(CodeEntity::new(format!("{}.{name}", class.name), i + 1, end_line));
            }
        }

        entities
    }
}

/// JavaScript/TypeScript parser: function declarations, arrow functions
/// bound to a name, and classes.
#[allow(clippy::struct_field_names)]
pub struct JsParser {
    fn_pattern: Regex,
    arrow_pattern: Regex,
    class_pattern: Regex,
}

impl Default for JsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl JsParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_pattern: Regex::new(
                r"^[\t ]*(export\s+)?(default\s+)?(async\s+)?function\*?\s+([a-zA-Z_$][a-zA-Z0-9_$]*)",
            )
            .expect("Invalid regex"),
            arrow_pattern: Regex::new(
                r"^[\t ]*(export\s+)?(const|let|var)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*(?::[^=]+)?=\s*(async\s+)?(\([^)]*\)|[a-zA-Z_$][a-zA-Z0-9_$]*)\s*(?::[^=]+)?=>",
            )
            .expect("Invalid regex"),
            class_pattern: Regex::new(
                r"^[\t ]*(export\s+)?(default\s+)?(abstract\s+)?class\s+([a-zA-Z_$][a-zA-Z0-9_$]*)",
            )
            .expect("Invalid regex"),
        }
    }
}

impl EntityParser for JsParser {
    fn parse(&self, content: &str) -> Vec<CodeEntity> {
        let lines: Vec<&str> = content.lines().collect();
        let mut entities = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let found = self
                .fn_pattern
                .captures(line)
                .map(|caps| capture_name(&caps, 4))
                .or_else(|| {
                    self.arrow_pattern
                        .captures(line)
                        .map(|caps| capture_name(&caps, 3))
                })
                .or_else(|| {
                    self.class_pattern
                        .captures(line)
                        .map(|caps| capture_name(&caps, 4))
                });

            if let Some(name) = found {
                entities.push(CodeEntity::new(name, i + 1, find_block_end(&lines, i)));
            }
        }

        entities
    }
}

/// C/C++ function definition parser.
pub struct CParser {
    fn_pattern: Regex,
}

impl Default for CParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // return_type name(params) {
            fn_pattern: Regex::new(
                r"^[\t ]*(?:static\s+|inline\s+|extern\s+|virtual\s+|explicit\s+)*(?:[a-zA-Z_][a-zA-Z0-9_:*&<>\s]*)\s+\**([a-zA-Z_][a-zA-Z0-9_:]*)\s*\([^)]*\)\s*(?:const\s*)?(?:noexcept\s*)?(?:override\s*)?(?:final\s*)?\{",
            )
            .expect("Invalid regex"),
        }
    }
}

impl EntityParser for CParser {
    fn parse(&self, content: &str) -> Vec<CodeEntity> {
        let lines: Vec<&str> = content.lines().collect();
        let mut entities = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let Some(caps) = self.fn_pattern.captures(line) else {
                continue;
            };
            let name = capture_name(&caps, 1);
            if matches!(name.as_str(), "if" | "while" | "for" | "switch" | "catch") {
                continue;
            }
            entities.push(CodeEntity::new(name, i + 1, find_block_end(&lines, i)));
        }

        entities
    }
}

/// Find the last line (1-indexed) of a brace-delimited block opened at or after `start`.
fn find_block_end(lines: &[&str], start: usize) -> usize {
    let mut depth = 0usize;
    let mut found_open = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    found_open = true;
                }
                '}' if found_open => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return i + 1;
                    }
                }
                // Declaration without a body (trait method, prototype).
                ';' if !found_open => return i + 1,
                _ => {}
            }
        }
    }

    lines.len()
}

/// Find the last line (1-indexed) of an indentation-delimited Python block.
fn find_python_block_end(lines: &[&str], start: usize, base_indent: usize) -> usize {
    let mut end_line = start + 1;

    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let current_indent = line.chars().take_while(|c| c.is_whitespace()).count();
        if current_indent <= base_indent {
            break;
        }
        end_line = i + 1;
    }

    end_line
}

/// Get a parser for the given language name.
#[must_use]
pub fn get_parser(language: &str) -> Option<Box<dyn EntityParser>> {
    match language.to_lowercase().as_str() {
        "rust" => Some(Box::new(RustParser::new())),
        "go" => Some(Box::new(GoParser::new())),
        "python" => Some(Box::new(PythonParser::new())),
        "javascript" | "typescript" => Some(Box::new(JsParser::new())),
        "c" | "c++" => Some(Box::new(CParser::new())),
        _ => None,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
