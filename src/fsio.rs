//! Asynchronous filesystem helpers.
//! Thin wrappers over `tokio::fs` that attach the originating path to every
//! I/O failure, so errors surface with enough context to act on.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

fn fs_err(path: &Path, source: std::io::Error) -> Error {
    Error::FileSystem { path: path.to_path_buf(), source }
}

/// Reads a file to a string.
pub async fn read_to_string(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| fs_err(path, e))
}

/// Writes `contents` to `path`, creating missing parent directories first.
pub async fn write(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| fs_err(parent, e))?;
    }
    tokio::fs::write(path, contents).await.map_err(|e| fs_err(path, e))
}

/// Lists the regular files directly inside `dir`, sorted by path.
/// Subdirectories are not descended into.
pub async fn read_dir_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| fs_err(dir, e))?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| fs_err(dir, e))? {
        let file_type = entry.file_type().await.map_err(|e| fs_err(&entry.path(), e))?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
