//! `snapshot` command: record the working copy's metrics as a new revision.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::cli::{Cli, SnapshotArgs};
use crate::error::{MetricDeltaError, Result};
use crate::git::GitContext;
use crate::operators::run_operator;
use crate::output::OperatorProgress;
use crate::state::{self, JsonStateStore, Revision};
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::context::ProjectContext;

const LOG_TARGET: &str = "commands";

/// Length of revision keys derived from content hashes.
const CONTENT_KEY_LEN: usize = 7;

#[must_use]
pub fn run_snapshot(args: &SnapshotArgs, cli: &Cli) -> i32 {
    match run_snapshot_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// # Errors
/// Returns an error if scanning, analysis or saving fails.
pub fn run_snapshot_impl(args: &SnapshotArgs, cli: &Cli) -> Result<i32> {
    let ctx = ProjectContext::discover(args.config.as_deref(), cli.no_config)?;
    let (revision, file_count) = build_revision(&ctx, &args.paths, cli.quiet)?;

    if args.dry_run {
        if !cli.quiet {
            println!("Dry-run: snapshot NOT saved\n");
            print_summary(&revision, file_count);
        }
        return Ok(EXIT_SUCCESS);
    }

    let store = JsonStateStore::for_project(&ctx.root);
    let path = store.record(revision.clone(), ctx.config.project.max_revisions)?;

    if !cli.quiet {
        println!("Snapshot recorded to {}\n", path.display());
        print_summary(&revision, file_count);
    }
    Ok(EXIT_SUCCESS)
}

/// Run every registered operator over the files under `paths` (the project
/// root when empty) and collect the output into a revision.
///
/// Returns the revision and the number of files analyzed.
///
/// # Errors
/// Returns an error if a path cannot be resolved or an operator fails.
pub fn build_revision(
    ctx: &ProjectContext,
    paths: &[PathBuf],
    quiet: bool,
) -> Result<(Revision, usize)> {
    let paths = if paths.is_empty() {
        vec![ctx.root.clone()]
    } else {
        paths.to_vec()
    };
    let files = ctx.resolve_targets(&paths)?;

    let (key, branch) = match GitContext::from_path(&ctx.root) {
        Some(git) => (git.commit, git.branch),
        None => (content_key(&ctx.root, &files)?, None),
    };
    log::info!(target: LOG_TARGET, "Recording revision {key} for {} file(s)", files.len());

    let mut revision = Revision::new(
        key,
        &ctx.config.project.archiver,
        state::current_unix_timestamp(),
    )
    .with_branch(branch);

    let registry = ctx.operator_registry();
    let operators: Vec<_> = registry.all().collect();
    let progress = OperatorProgress::new(operators.len() as u64, quiet);

    for operator in operators {
        let name = operator.name();
        progress.start(name);
        let output = run_operator(operator, &ctx.root, &files)?;
        revision.record_output(name, &output);
        progress.inc();
    }
    progress.finish();

    Ok((revision, files.len()))
}

/// Short SHA-256 over the file keys and their contents.
///
/// # Errors
/// Returns an error if an existing file cannot be read.
pub fn content_key(root: &Path, files: &[String]) -> Result<String> {
    let mut sorted: Vec<&String> = files.iter().collect();
    sorted.sort();

    let mut hasher = Sha256::new();
    for file in sorted {
        let path = root.join(file);
        hasher.update(file.as_bytes());
        hasher.update([0]);
        match fs::read(&path) {
            Ok(content) => hasher.update(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(MetricDeltaError::FileRead { path, source: e }),
        }
        hasher.update([0]);
    }

    let digest = format!("{:x}", hasher.finalize());
    Ok(digest[..CONTENT_KEY_LEN].to_string())
}

fn print_summary(revision: &Revision, file_count: usize) {
    println!("  Revision: {}", revision.key);
    println!("  Archiver: {}", revision.archiver);
    if let Some(ref branch) = revision.branch {
        println!("  Branch:   {branch}");
    }
    println!("  Files:    {file_count}");
    println!("  Targets:  {}", revision.target_count());
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
