mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    Config, CustomLanguageConfig, DEFAULT_ARCHIVER, DiffConfig, ProjectConfig, ScannerConfig,
};
pub use validation::validate_config;
