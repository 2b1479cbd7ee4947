use std::path::{Path, PathBuf};

use crate::error::{MetricDeltaError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use super::validation::validate_config;

const LOG_TARGET: &str = "config";

pub const LOCAL_CONFIG_NAME: &str = ".metric-delta.toml";
const USER_CONFIG_NAME: &str = "config.toml";

pub trait ConfigLoader {
    /// Load the configuration that applies to `project_root`.
    ///
    /// # Errors
    /// Returns an error if a found config file cannot be read, parsed or validated.
    fn load(&self, project_root: &Path) -> Result<Config>;

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.metric-delta.toml` in the project root
/// 2. `config.toml` in the platform user config directory
/// 3. `Config::default()`
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.user_config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, project_root: &Path) -> Result<Config> {
        let local = project_root.join(LOCAL_CONFIG_NAME);
        if self.fs.is_file(&local) {
            return self.load_from_path(&local);
        }

        if let Some(user) = self.user_config_path()
            && self.fs.is_file(&user)
        {
            return self.load_from_path(&user);
        }

        log::debug!(target: LOG_TARGET, "No config file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        log::debug!(target: LOG_TARGET, "Loading config from {}", path.display());
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| MetricDeltaError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
