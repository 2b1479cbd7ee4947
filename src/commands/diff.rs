//! `diff` command: compare the working copy with the latest revision.

use crate::cli::{Cli, DiffArgs};
use crate::diff::{DiffOptions, Project, compute_diff};
use crate::error::Result;
use crate::output::{ColorMode, formatter_for};
use crate::state::JsonStateStore;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::context::{ProjectContext, color_choice_to_mode, write_output};

const LOG_TARGET: &str = "commands";

#[must_use]
pub fn run_diff(args: &DiffArgs, cli: &Cli) -> i32 {
    match run_diff_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// # Errors
/// Returns an error if configuration, state or analysis fails.
pub fn run_diff_impl(args: &DiffArgs, cli: &Cli) -> Result<i32> {
    let ctx = ProjectContext::discover(args.config.as_deref(), cli.no_config)?;
    let report = render_diff(&ctx, args, color_choice_to_mode(cli.color))?;
    write_output(args.output.as_deref(), &report, cli.quiet)?;
    Ok(EXIT_SUCCESS)
}

/// Run the diff for `ctx` and render it in the requested format.
///
/// Command-line flags override the `[diff]` config section. Output written
/// to a file is never colored.
///
/// # Errors
/// Returns an error if targets cannot be resolved or the diff fails.
pub fn render_diff(ctx: &ProjectContext, args: &DiffArgs, color: ColorMode) -> Result<String> {
    let config = &ctx.config;
    let metrics = args
        .metrics
        .clone()
        .unwrap_or_else(|| config.diff.metrics.clone());
    let options = DiffOptions {
        changes_only: config.diff.changes_only && !args.all,
        detail: config.diff.detail && !args.no_detail,
    };

    let files = ctx.resolve_targets(&args.files)?;
    let registry = ctx.operator_registry();
    let store = JsonStateStore::for_project(&ctx.root);
    let project = Project::new(&ctx.root, &config.project.archiver);

    log::info!(
        target: LOG_TARGET,
        "Comparing {} file(s) against the latest '{}' revision",
        files.len(),
        project.archiver
    );
    let result = compute_diff(&registry, &store, &project, &files, &metrics, options)?;
    log::info!(target: LOG_TARGET, "{} target(s) in result", result.len());

    let color = if args.output.is_some() {
        ColorMode::Never
    } else {
        color
    };
    formatter_for(args.format, color).format(&result)
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
