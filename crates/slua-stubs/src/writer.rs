//! Writing generated stubs to disk.

use std::path::{Path, PathBuf};

use tokio::fs;

/// Write generated stubs to `path`, replacing any previous contents.
///
/// Missing parent directories are created. Returns the resolved path of the
/// written file.
pub async fn write_stubs(path: &Path, contents: &str) -> Result<PathBuf, WriteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    fs::write(path, contents)
        .await
        .map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    // Only used for display, so fall back to the given path
    let resolved = fs::canonicalize(path)
        .await
        .unwrap_or_else(|_| path.to_path_buf());

    tracing::debug!("Wrote {} bytes to {}", contents.len(), resolved.display());

    Ok(resolved)
}

/// Errors that can occur when writing the stub file.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
