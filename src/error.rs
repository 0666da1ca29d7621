// Author: kelexine (https://github.com/kelexine)
// error.rs — Errors at the file-reading boundary

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a source file could not be read. Rendered into the `error` field of a
/// failed batch entry; never raised past the batch.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("Failed to read file: {} ({source})", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied(path.to_path_buf()),
            _ => SourceError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Read a file as UTF-8, replacing invalid sequences.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let bytes = std::fs::read(path).map_err(|e| SourceError::from_io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
