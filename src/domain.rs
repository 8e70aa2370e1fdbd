pub mod session;

use crate::error::{ExplorerError, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One file or directory in a listing
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    /// Size in bytes, `None` for directories
    pub size: Option<u64>,
    pub modified_date: DateTime<Utc>,
    /// Lowercased, with the leading dot (`".txt"`), empty when there is none
    pub extension: String,
}

impl DirectoryEntry {
    pub fn from_path(path: &Path) -> io::Result<Self> {
        // Broken symlinks are still listed, using the link's own metadata
        let metadata = fs::metadata(path).or_else(|_| fs::symlink_metadata(path))?;
        let modified_date: DateTime<Utc> = metadata.modified()?.into();

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        let is_dir = metadata.is_dir();

        Ok(DirectoryEntry {
            path: path.to_path_buf(),
            name,
            is_dir,
            size: if is_dir { None } else { Some(metadata.len()) },
            modified_date,
            extension,
        })
    }

    /// Lowercased file stem, the name sort field
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| self.name.to_lowercase())
    }

    /// Label for the type column: the extension for files, `fld` for directories
    pub fn type_label(&self) -> &str {
        if self.is_dir {
            "fld"
        } else {
            &self.extension
        }
    }
}

/// Field an entry listing is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Name,
    Time,
    Extension,
    Size,
}

/// Ordering applied to every listing of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub group_directories_first: bool,
    pub field: SortField,
    pub descending: bool,
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec {
            group_directories_first: true,
            field: SortField::Name,
            descending: false,
        }
    }
}

/// Value compared after the group; one variant per sort field
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue {
    Text(String),
    Time(DateTime<Utc>),
    Size(u64),
}

/// Derived ordering key. Field order matters: the derived `Ord` compares
/// `group`, then `value`, then `tiebreak`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    pub group: u8,
    pub value: FieldValue,
    tiebreak: String,
}

impl SortSpec {
    pub fn sort_key(&self, entry: &DirectoryEntry) -> SortKey {
        let group = if self.group_directories_first && !entry.is_dir {
            1
        } else {
            0
        };

        let value = match self.field {
            SortField::Name => FieldValue::Text(entry.stem()),
            SortField::Time => FieldValue::Time(entry.modified_date),
            SortField::Extension => {
                FieldValue::Text(entry.extension.trim_start_matches('.').to_string())
            }
            SortField::Size => FieldValue::Size(entry.size.unwrap_or(0)),
        };

        SortKey {
            group,
            value,
            tiebreak: entry.name.to_lowercase(),
        }
    }

    /// Sorts ascending by key, then reverses the whole sequence if descending
    pub fn sort(&self, entries: &mut [DirectoryEntry]) {
        entries.sort_by_cached_key(|e| self.sort_key(e));
        if self.descending {
            entries.reverse();
        }
    }

    /// The three-letter code form, e.g. `snh`
    pub fn code(&self) -> String {
        let group = if self.group_directories_first { 's' } else { 'm' };
        let field = match self.field {
            SortField::Name => 'n',
            SortField::Time => 't',
            SortField::Extension => 'e',
            SortField::Size => 's',
        };
        let order = if self.descending { 'l' } else { 'h' };
        [group, field, order].iter().collect()
    }
}

impl FromStr for SortSpec {
    type Err = ExplorerError;

    /// Parses a code such as `snh`: grouping (`s` = directories first),
    /// field (`n`, `t`, `e`, `s`), direction (`h` ascending, `l` descending).
    fn from_str(code: &str) -> Result<Self> {
        let chars: Vec<char> = code.trim().chars().collect();
        let invalid = || {
            ExplorerError::ConfigError(format!(
                "Invalid sort code '{}'. Use three letters like 'snh': \
                 [s]=folders first, then n/t/e/s for name/time/extension/size, then h/l for ascending/descending",
                code
            ))
        };

        if chars.len() != 3 {
            return Err(invalid());
        }

        let field = match chars[1] {
            'n' => SortField::Name,
            't' => SortField::Time,
            'e' => SortField::Extension,
            's' => SortField::Size,
            _ => return Err(invalid()),
        };

        let descending = match chars[2] {
            'h' => false,
            'l' => true,
            _ => return Err(invalid()),
        };

        Ok(SortSpec {
            group_directories_first: chars[0] == 's',
            field,
            descending,
        })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Reads the immediate entries of `dir_path` and orders them by `spec`.
///
/// Nothing is filtered: hidden entries and directories are included. Any
/// entry that fails to stat fails the whole listing.
pub fn list_directory(dir_path: &Path, spec: &SortSpec) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir_path)? {
        let entry = entry?;
        entries.push(DirectoryEntry::from_path(&entry.path())?);
    }

    spec.sort(&mut entries);
    tracing::debug!(
        dir = %dir_path.display(),
        count = entries.len(),
        sort = %spec,
        "listed directory"
    );

    Ok(entries)
}
