use super::*;

#[test]
fn empty_document_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.project.archiver, "git");
    assert_eq!(config.project.max_revisions, None);
    assert_eq!(
        config.diff.metrics,
        vec!["raw.loc", "raw.sloc", "cyclomatic.complexity"]
    );
    assert!(config.diff.changes_only);
    assert!(config.diff.detail);
    assert!(config.scanner.gitignore);
    assert!(config.scanner.extensions.is_empty());
}

#[test]
fn parses_full_document() {
    let content = r#"
[project]
archiver = "nightly"
max_revisions = 20

[diff]
metrics = ["cyclomatic.complexity"]
changes_only = false
detail = false

[scanner]
gitignore = false
extensions = ["py"]
exclude = ["**/vendor/**"]

[languages.kotlin]
extensions = ["kt", "kts"]
single_line_comments = ["//"]
multi_line_comments = [["/*", "*/"]]
"#;
    let config: Config = toml::from_str(content).unwrap();

    assert_eq!(config.project.archiver, "nightly");
    assert_eq!(config.project.max_revisions, Some(20));
    assert_eq!(config.diff.metrics, vec!["cyclomatic.complexity"]);
    assert!(!config.diff.changes_only);
    assert!(!config.diff.detail);
    assert!(!config.scanner.gitignore);
    assert_eq!(config.scanner.exclude, vec!["**/vendor/**"]);

    let kotlin = &config.languages["kotlin"];
    assert_eq!(kotlin.extensions, vec!["kt", "kts"]);
    assert_eq!(
        kotlin.multi_line_comments,
        vec![("/*".to_string(), "*/".to_string())]
    );
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config: Config = toml::from_str("[diff]\ndetail = false\n").unwrap();

    assert!(!config.diff.detail);
    assert!(config.diff.changes_only);
    assert_eq!(config.diff.metrics.len(), 3);
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<Config>("[diff]\nmetric = [\"raw.loc\"]\n").is_err());
    assert!(toml::from_str::<Config>("[unknown]\nx = 1\n").is_err());
}
