use std::error::Error as _;
use std::path::PathBuf;

use super::*;

#[test]
fn unknown_operator_names_the_operator() {
    let err = MetricDeltaError::UnknownOperator("halstead".to_string());
    assert_eq!(err.to_string(), "Unknown operator: halstead");
}

#[test]
fn unknown_metric_names_the_identifier() {
    let err = MetricDeltaError::UnknownMetric("raw.tokens".to_string());
    assert_eq!(err.to_string(), "Unknown metric: raw.tokens");
}

#[test]
fn operator_failed_identifies_operator_and_keeps_source() {
    let cause = MetricDeltaError::FileRead {
        path: PathBuf::from("src/lib.rs"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let err = MetricDeltaError::operator_failed("raw", cause);

    let message = err.to_string();
    assert!(message.contains("'raw'"));
    assert!(message.contains("src/lib.rs"));

    let source = err.source().expect("operator failure keeps its cause");
    assert!(source.to_string().contains("Failed to read file"));
}

#[test]
fn no_revisions_mentions_snapshot() {
    let err = MetricDeltaError::NoRevisions {
        archiver: "git".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("'git'"));
    assert!(message.contains("snapshot"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: MetricDeltaError = io.into();
    assert!(matches!(err, MetricDeltaError::Io(_)));
}

#[test]
fn toml_error_converts() {
    let parse = toml::from_str::<toml::Value>("[broken").unwrap_err();
    let err: MetricDeltaError = parse.into();
    assert!(err.to_string().starts_with("TOML parse error"));
}

#[test]
fn json_error_converts() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: MetricDeltaError = parse.into();
    assert!(err.to_string().starts_with("JSON error"));
}
