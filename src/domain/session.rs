use super::{list_directory, DirectoryEntry, SortSpec};
use crate::config::LookupTables;
use crate::error::{ExplorerError, Result};
use crate::file_opener::Opener;
use crate::tui::{build_table, Command};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// What a command did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The user asked to leave
    Quit,
    /// The current directory changed to this path
    Entered(PathBuf),
    /// A file was handed to the default application
    Opened(PathBuf),
    /// Nothing changed
    Stayed,
    /// The input was not a command
    Unrecognized(String),
}

/// Browsing state: the current directory plus the fixed settings of the run
#[derive(Debug)]
pub struct Session {
    current_dir: PathBuf,
    sort: SortSpec,
    tables: LookupTables,
}

impl Session {
    /// Starts browsing at `start`, stored as an absolute, canonical path
    pub fn new(start: &Path, sort: SortSpec, tables: LookupTables) -> Result<Self> {
        let current_dir = fs::canonicalize(start).map_err(|e| ExplorerError::from_io(start, e))?;
        if !current_dir.is_dir() {
            return Err(ExplorerError::ConfigError(format!(
                "Path is not a directory: {}",
                start.display()
            )));
        }

        Ok(Self {
            current_dir,
            sort,
            tables,
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    /// Live, sorted entries of the current directory
    pub fn listing(&self) -> Result<Vec<DirectoryEntry>> {
        list_directory(&self.current_dir, &self.sort)
            .map_err(|e| ExplorerError::from_io(&self.current_dir, e))
    }

    /// The table for the current directory
    pub fn render(&self) -> Result<String> {
        let entries = self.listing()?;
        Ok(build_table(&self.current_dir, &entries, &self.tables))
    }

    pub fn apply(&mut self, command: Command, opener: &dyn Opener) -> Result<Transition> {
        match command {
            Command::Quit => Ok(Transition::Quit),
            Command::Up => Ok(self.go_up()),
            Command::OpenIndex(index) => self.open_index(index, opener),
            Command::OpenPath(path) => self.open_path(&path, opener),
            Command::Refresh => Ok(Transition::Stayed),
            Command::Unknown(input) => Ok(Transition::Unrecognized(input)),
        }
    }

    /// Moves to the parent directory; the root stays where it is
    pub fn go_up(&mut self) -> Transition {
        match self.current_dir.parent() {
            Some(parent) => {
                self.current_dir = parent.to_path_buf();
                tracing::debug!(dir = %self.current_dir.display(), "went up");
                Transition::Entered(self.current_dir.clone())
            }
            None => Transition::Stayed,
        }
    }

    /// Opens the `index`-th entry (1-based) of a fresh listing
    pub fn open_index(&mut self, index: i64, opener: &dyn Opener) -> Result<Transition> {
        let entries = self.listing()?;
        let entry = usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| entries.get(i))
            .ok_or(ExplorerError::IndexOutOfRange {
                index,
                len: entries.len(),
            })?;

        self.open_target(&entry.path, opener)
    }

    /// Opens a literal path. Relative paths start at the session's current
    /// directory, never at the process working directory.
    pub fn open_path(&mut self, path: &Path, opener: &dyn Opener) -> Result<Transition> {
        let target = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir.join(path)
        };

        self.open_target(&target, opener)
    }

    /// Symlinks are kept as listed, so `go_up` returns to where the link lives
    fn open_target(&mut self, target: &Path, opener: &dyn Opener) -> Result<Transition> {
        let target = normalize(target);
        let metadata = fs::metadata(&target).map_err(|e| ExplorerError::from_io(&target, e))?;

        if metadata.is_dir() {
            // Read it first so an unreadable directory never becomes current
            fs::read_dir(&target).map_err(|e| ExplorerError::from_io(&target, e))?;
            self.current_dir = target.clone();
            tracing::debug!(dir = %target.display(), "entered directory");
            Ok(Transition::Entered(target))
        } else {
            opener.open(&target)?;
            Ok(Transition::Opened(target))
        }
    }
}

/// Drops `.` and folds `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
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
