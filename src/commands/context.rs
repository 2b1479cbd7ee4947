//! Shared setup for commands: project discovery, configuration and target
//! resolution.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::language::LanguageRegistry;
use crate::operators::OperatorRegistry;
use crate::output::ColorMode;
use crate::path_utils::target_key;
use crate::scanner::{FileScanner, scanner_from_config};
use crate::state::discover_project_root;

const LOG_TARGET: &str = "commands";

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration for `project_root`, or the defaults with `--no-config`.
///
/// # Errors
/// Returns an error if a config file exists but cannot be loaded.
pub fn load_config(
    project_root: &Path,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(
        || loader.load(project_root),
        |path| loader.load_from_path(path),
    )
}

/// Everything a command needs to know about the project it runs in.
#[derive(Debug)]
pub struct ProjectContext {
    /// Directory relative paths on the command line are resolved against
    pub cwd: PathBuf,
    /// Canonical project root
    pub root: PathBuf,
    pub config: Config,
    pub languages: LanguageRegistry,
}

impl ProjectContext {
    /// Discover the project around the working directory and load its config.
    ///
    /// # Errors
    /// Returns an error if the working directory or the config cannot be read.
    pub fn discover(config_path: Option<&Path>, no_config: bool) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::for_dir(cwd, config_path, no_config)
    }

    /// Same as [`ProjectContext::discover`], starting from `cwd`.
    ///
    /// # Errors
    /// Returns an error if the config cannot be loaded.
    pub fn for_dir(cwd: PathBuf, config_path: Option<&Path>, no_config: bool) -> Result<Self> {
        let root = discover_project_root(&cwd);
        log::debug!(target: LOG_TARGET, "Project root: {}", root.display());

        let config = load_config(&root, config_path, no_config)?;
        let languages = LanguageRegistry::with_custom_languages(&config.languages);
        Ok(Self {
            cwd,
            root,
            config,
            languages,
        })
    }

    #[must_use]
    pub fn operator_registry(&self) -> OperatorRegistry {
        OperatorRegistry::with_languages(self.languages.clone())
    }

    /// Resolve command-line paths into root-relative file keys.
    ///
    /// Directories expand to the files the configured scanner finds in them.
    /// Order follows the arguments; duplicates are dropped.
    ///
    /// # Errors
    /// Returns an error if a path is outside the project or a directory
    /// cannot be scanned.
    pub fn resolve_targets(&self, paths: &[PathBuf]) -> Result<Vec<String>> {
        let scanner = scanner_from_config(&self.config.scanner, &self.languages)?;
        let mut keys = IndexSet::new();

        for path in paths {
            let absolute = self.cwd.join(path);
            if absolute.is_dir() {
                for file in scanner.scan(&absolute)? {
                    keys.insert(target_key(&self.root, &self.cwd, &file)?);
                }
            } else {
                keys.insert(target_key(&self.root, &self.cwd, path)?);
            }
        }

        log::debug!(target: LOG_TARGET, "Resolved {} target file(s)", keys.len());
        Ok(keys.into_iter().collect())
    }
}

/// Write to `output_path`, or to stdout unless quiet.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
