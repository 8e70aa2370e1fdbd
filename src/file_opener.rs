//! Hands files to the operating system's default application

use crate::error::{ExplorerError, Result};
use std::path::Path;

/// Something that can open a path outside of this program
pub trait Opener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Uses the platform handler (`xdg-open`, `open`, `start`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        open_file(path)
    }
}

/// Opens `path` with the default application for its type
pub fn open_file(path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), "opening with default application");
    open::that(path).map_err(|e| ExplorerError::OpenError(format!("{}: {}", path.display(), e)))
}
