//! Error types shared across the crate

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExplorerError>;

#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Lookup tables or startup options could not be used
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// `index` is what the user typed, `len` the size of the listing
    #[error("no entry {index}: the listing has {len} entries")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("failed to open: {0}")]
    OpenError(String),
}

impl ExplorerError {
    /// Attaches `path` to the io errors a user can act on.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ExplorerError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => ExplorerError::PermissionDenied(path.to_path_buf()),
            _ => ExplorerError::Io(err),
        }
    }
}
