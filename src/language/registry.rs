use std::collections::HashMap;
use std::path::Path;

use crate::config::CustomLanguageConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    pub single_line: Vec<String>,
    pub multi_line: Vec<(String, String)>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(single_line: Vec<&str>, multi_line: Vec<(&str, &str)>) -> Self {
        Self {
            single_line: single_line.into_iter().map(String::from).collect(),
            multi_line: multi_line
                .into_iter()
                .map(|(open, close)| (open.to_string(), close.to_string()))
                .collect(),
        }
    }
}

/// A language the operators know how to measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Display name; entity parsers and decision patterns are keyed on it.
    pub name: String,
    pub extensions: Vec<String>,
    pub comment_syntax: CommentSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, comment_syntax: CommentSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            comment_syntax,
        }
    }

    fn from_config(name: &str, config: &CustomLanguageConfig) -> Self {
        Self {
            name: name.to_string(),
            extensions: config.extensions.clone(),
            comment_syntax: CommentSyntax {
                single_line: config.single_line_comments.clone(),
                multi_line: config.multi_line_comments.clone(),
            },
        }
    }
}

struct Builtin {
    name: &'static str,
    extensions: &'static [&'static str],
    single_line: &'static [&'static str],
    multi_line: &'static [(&'static str, &'static str)],
}

const C_STYLE_BLOCK: &[(&str, &str)] = &[("/*", "*/")];

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "Rust",
        extensions: &["rs"],
        single_line: &["//", "///", "//!"],
        multi_line: C_STYLE_BLOCK,
    },
    Builtin {
        name: "Go",
        extensions: &["go"],
        single_line: &["//"],
        multi_line: C_STYLE_BLOCK,
    },
    Builtin {
        name: "Python",
        extensions: &["py", "pyi"],
        single_line: &["#"],
        multi_line: &[("'''", "'''"), ("\"\"\"", "\"\"\"")],
    },
    Builtin {
        name: "JavaScript",
        extensions: &["js", "mjs", "cjs", "jsx"],
        single_line: &["//"],
        multi_line: C_STYLE_BLOCK,
    },
    Builtin {
        name: "TypeScript",
        extensions: &["ts", "mts", "cts", "tsx"],
        single_line: &["//"],
        multi_line: C_STYLE_BLOCK,
    },
    Builtin {
        name: "C",
        extensions: &["c", "h"],
        single_line: &["//"],
        multi_line: C_STYLE_BLOCK,
    },
    Builtin {
        name: "C++",
        extensions: &["cpp", "hpp", "cc", "cxx", "hxx"],
        single_line: &["//"],
        multi_line: C_STYLE_BLOCK,
    },
];

impl Builtin {
    fn language(&self) -> Language {
        Language::new(
            self.name,
            self.extensions.to_vec(),
            CommentSyntax::new(self.single_line.to_vec(), self.multi_line.to_vec()),
        )
    }
}

/// Maps file extensions to the language used to analyze them.
///
/// Extension lookup ignores ASCII case, so `App.PY` is Python.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    by_extension: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// A registry without any languages.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            languages: Vec::new(),
            by_extension: HashMap::new(),
        }
    }

    /// Register a language. Later registrations win for shared extensions.
    pub fn register(&mut self, language: Language) {
        let index = self.languages.len();
        for ext in &language.extensions {
            self.by_extension.insert(ext.to_ascii_lowercase(), index);
        }
        self.languages.push(language);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.by_extension
            .get(&ext.to_ascii_lowercase())
            .map(|&index| &self.languages[index])
    }

    /// Language of a file path or target key, from its extension.
    #[must_use]
    pub fn detect(&self, path: &Path) -> Option<&Language> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.get_by_extension(ext))
    }

    /// All extensions some language claims, sorted.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.by_extension.keys().cloned().collect();
        extensions.sort();
        extensions
    }

    /// Built-in languages extended (or overridden) by `[languages]` entries,
    /// applied in name order.
    #[must_use]
    pub fn with_custom_languages(custom: &HashMap<String, CustomLanguageConfig>) -> Self {
        let mut registry = Self::default();

        let mut names: Vec<&String> = custom.keys().collect();
        names.sort();
        for name in names {
            registry.register(Language::from_config(name, &custom[name]));
        }

        registry
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for builtin in BUILTINS {
            registry.register(builtin.language());
        }
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
