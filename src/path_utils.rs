//! Conversion between filesystem paths and the forward-slash, root-relative
//! keys under which files are recorded.

use std::path::{Component, Path, PathBuf};

use crate::error::{MetricDeltaError, Result};

/// Resolve `.` and `..` without touching the filesystem.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Key of `path` relative to `root`, joined with `/` on every platform.
///
/// Relative paths are taken relative to `base` (usually the working
/// directory). Existing paths are canonicalized; a deleted file keeps its
/// lexical location so it can still be compared.
///
/// # Errors
/// Returns `Config` if the path lies outside the project root.
pub fn target_key(root: &Path, base: &Path, path: &Path) -> Result<String> {
    let absolute = normalize_lexically(&base.join(path));
    let resolved = resolve(absolute);

    let relative = resolved.strip_prefix(root).map_err(|_| {
        MetricDeltaError::Config(format!(
            "{} is outside the project root {}",
            path.display(),
            root.display()
        ))
    })?;

    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}

fn resolve(absolute: PathBuf) -> PathBuf {
    if let Ok(canonical) = dunce::canonicalize(&absolute) {
        return canonical;
    }
    // Deleted file: canonicalize the directory it lived in.
    let in_parent = absolute
        .parent()
        .zip(absolute.file_name())
        .and_then(|(parent, name)| dunce::canonicalize(parent).ok().map(|dir| dir.join(name)));
    in_parent.unwrap_or(absolute)
}
