use std::path::PathBuf;

use super::*;

#[test]
fn diff_defaults() {
    let cli = Cli::parse_from(["metric-delta", "diff"]);
    let Commands::Diff(args) = cli.command else {
        panic!("Expected Diff command");
    };

    assert_eq!(args.files, vec![PathBuf::from(".")]);
    assert_eq!(args.metrics, None);
    assert!(!args.all);
    assert!(!args.no_detail);
    assert_eq!(args.format, OutputFormat::Text);
    assert_eq!(args.output, None);
}

#[test]
fn diff_with_files_and_metrics() {
    let cli = Cli::parse_from([
        "metric-delta",
        "diff",
        "src/a.py",
        "src/b.py",
        "--metrics",
        "raw.loc,cyclomatic.complexity",
    ]);
    let Commands::Diff(args) = cli.command else {
        panic!("Expected Diff command");
    };

    assert_eq!(
        args.files,
        vec![PathBuf::from("src/a.py"), PathBuf::from("src/b.py")]
    );
    assert_eq!(
        args.metrics,
        Some(vec![
            "raw.loc".to_string(),
            "cyclomatic.complexity".to_string()
        ])
    );
}

#[test]
fn diff_flags() {
    let cli = Cli::parse_from([
        "metric-delta",
        "diff",
        "--all",
        "--no-detail",
        "-f",
        "json",
        "-o",
        "out.json",
        "-c",
        "custom.toml",
    ]);
    let Commands::Diff(args) = cli.command else {
        panic!("Expected Diff command");
    };

    assert!(args.all);
    assert!(args.no_detail);
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.output, Some(PathBuf::from("out.json")));
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn snapshot_args() {
    let cli = Cli::parse_from(["metric-delta", "snapshot", "src", "--dry-run"]);
    let Commands::Snapshot(args) = cli.command else {
        panic!("Expected Snapshot command");
    };

    assert_eq!(args.paths, vec![PathBuf::from("src")]);
    assert!(args.dry_run);
}

#[test]
fn snapshot_without_paths() {
    let cli = Cli::parse_from(["metric-delta", "snapshot"]);
    let Commands::Snapshot(args) = cli.command else {
        panic!("Expected Snapshot command");
    };
    assert!(args.paths.is_empty());
    assert!(!args.dry_run);
}

#[test]
fn list_metrics_command() {
    let cli = Cli::parse_from(["metric-delta", "list-metrics"]);
    assert!(matches!(cli.command, Commands::ListMetrics));
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "metric-delta",
        "diff",
        "-vv",
        "--color",
        "never",
        "--no-config",
        "--quiet",
    ]);

    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.color, ColorChoice::Never);
    assert!(cli.no_config);
    assert!(cli.quiet);
}

#[test]
fn unknown_format_is_rejected() {
    let result = Cli::try_parse_from(["metric-delta", "diff", "--format", "sarif"]);
    assert!(result.is_err());
}
