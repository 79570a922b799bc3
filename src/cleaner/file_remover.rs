//! Permanent removal of a single file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RemoveError {
    #[error("File not found at '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied for '{}'", .0.display())]
    PermissionDenied(PathBuf),

    #[error("An unexpected error occurred while deleting '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Deletes the file at `path`. There is no trash and no undo.
pub fn remove(path: &Path) -> Result<(), RemoveError> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed {}", path.display());
            Ok(())
        }
        Err(err) => Err(match err.kind() {
            io::ErrorKind::NotFound => RemoveError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => RemoveError::PermissionDenied(path.to_path_buf()),
            _ => RemoveError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }),
    }
}
