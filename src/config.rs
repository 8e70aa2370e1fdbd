//! Icon and description lookup tables

use crate::domain::DirectoryEntry;
use crate::error::{ExplorerError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_ICON: &str = "📃";
pub const FOLDER_ICON: &str = "📁";
pub const FOLDER_DESCRIPTION: &str = "File folder";

/// Extension (with leading dot) to display string, as stored on disk
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ExtensionTable(HashMap<String, String>);

impl ExtensionTable {
    /// Extensions are matched case-insensitively
    fn normalized(self) -> Self {
        ExtensionTable(
            self.0
                .into_iter()
                .map(|(ext, value)| (ext.to_lowercase(), value))
                .collect(),
        )
    }

    pub fn get(&self, extension: &str) -> Option<&str> {
        self.0.get(extension).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExtensionTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ExtensionTable(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
            .normalized()
    }
}

/// Both tables, loaded once at startup and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    pub icons: ExtensionTable,
    pub descriptions: ExtensionTable,
}

impl LookupTables {
    pub fn new(icons: ExtensionTable, descriptions: ExtensionTable) -> Self {
        LookupTables {
            icons: icons.normalized(),
            descriptions: descriptions.normalized(),
        }
    }

    /// Get the config directory (~/.config/cliexplorer)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cliexplorer"))
    }

    pub fn default_icons_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("icons.json"))
    }

    pub fn default_descriptions_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("descriptions.json"))
    }

    /// Loads both tables. A missing or malformed file is an error.
    pub fn load(icons_path: &Path, descriptions_path: &Path) -> Result<Self> {
        let icons = load_table(icons_path)?;
        let descriptions = load_table(descriptions_path)?;

        tracing::debug!(
            icons = icons.len(),
            descriptions = descriptions.len(),
            "loaded lookup tables"
        );

        Ok(Self::new(icons, descriptions))
    }

    pub fn icon_for(&self, entry: &DirectoryEntry) -> &str {
        if entry.is_dir {
            FOLDER_ICON
        } else {
            self.icons.get(&entry.extension).unwrap_or(DEFAULT_FILE_ICON)
        }
    }

    /// Looked up by extension; unknown extensions get `"<EXT> file"`
    pub fn description_for(&self, entry: &DirectoryEntry) -> String {
        if entry.is_dir {
            return FOLDER_DESCRIPTION.to_string();
        }

        if let Some(description) = self.descriptions.get(&entry.extension) {
            return description.to_string();
        }

        let ext = entry.extension.trim_start_matches('.');
        if ext.is_empty() {
            "File".to_string()
        } else {
            format!("{} file", ext.to_uppercase())
        }
    }
}

fn load_table(path: &Path) -> Result<ExtensionTable> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ExplorerError::ConfigError(format!(
            "Failed to read lookup table {}: {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        ExplorerError::ConfigError(format!(
            "Failed to parse lookup table {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn create_test_entry(name: &str, is_dir: bool) -> DirectoryEntry {
        let path = PathBuf::from(name);
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        DirectoryEntry {
            path,
            name: name.to_string(),
            is_dir,
            size: if is_dir { None } else { Some(0) },
            modified_date: Utc::now(),
            extension,
        }
    }

    fn write_tables(dir: &Path) -> (PathBuf, PathBuf) {
        let icons = dir.join("icons.json");
        let descriptions = dir.join("descriptions.json");
        fs::write(&icons, r#"{ ".txt": "📝", ".RS": "🦀" }"#).unwrap();
        fs::write(&descriptions, r#"{ ".txt": "Text document" }"#).unwrap();
        (icons, descriptions)
    }

    mod load_tests {
        use super::*;

        #[test]
        fn test_load_tables() {
            let temp_dir = TempDir::new().unwrap();
            let (icons, descriptions) = write_tables(temp_dir.path());

            let tables = LookupTables::load(&icons, &descriptions).unwrap();

            assert_eq!(tables.icons.len(), 2);
            assert_eq!(tables.descriptions.len(), 1);
            assert_eq!(tables.icons.get(".rs"), Some("🦀"));
        }

        #[test]
        fn test_load_missing_file_is_config_error() {
            let temp_dir = TempDir::new().unwrap();
            let (icons, _) = write_tables(temp_dir.path());

            let result = LookupTables::load(&icons, &temp_dir.path().join("nope.json"));
            match result {
                Err(ExplorerError::ConfigError(msg)) => assert!(msg.contains("nope.json")),
                other => panic!("expected ConfigError, got {:?}", other),
            }
        }

        #[test]
        fn test_load_malformed_file_is_config_error() {
            let temp_dir = TempDir::new().unwrap();
            let (icons, descriptions) = write_tables(temp_dir.path());
            fs::write(&descriptions, "[1, 2, 3]").unwrap();

            let result = LookupTables::load(&icons, &descriptions);
            assert!(matches!(result, Err(ExplorerError::ConfigError(_))));
        }

        #[test]
        fn test_shipped_sample_tables_load() {
            let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
            let tables = LookupTables::load(
                &assets.join("icons.json"),
                &assets.join("descriptions.json"),
            )
            .unwrap();
            assert_eq!(tables.icons.len(), tables.descriptions.len());
            assert_eq!(tables.descriptions.get(".rs"), Some("Rust source file"));
        }

        #[test]
        fn test_default_paths_share_config_dir() {
            if let (Some(icons), Some(descriptions)) = (
                LookupTables::default_icons_path(),
                LookupTables::default_descriptions_path(),
            ) {
                assert_eq!(icons.parent(), descriptions.parent());
                assert!(icons.ends_with("cliexplorer/icons.json"));
            }
        }
    }

    mod lookup_tests {
        use super::*;

        fn tables() -> LookupTables {
            LookupTables::new(
                [(".txt", "📝")].into_iter().collect(),
                [(".txt", "Text document")].into_iter().collect(),
            )
        }

        #[test]
        fn test_known_extension() {
            let tables = tables();
            let entry = create_test_entry("notes.TXT", false);
            assert_eq!(tables.icon_for(&entry), "📝");
            assert_eq!(tables.description_for(&entry), "Text document");
        }

        #[test]
        fn test_unknown_extension_fallbacks() {
            let tables = tables();
            let entry = create_test_entry("archive.tar.gz", false);
            assert_eq!(tables.icon_for(&entry), DEFAULT_FILE_ICON);
            assert_eq!(tables.description_for(&entry), "GZ file");
        }

        #[test]
        fn test_extensionless_file() {
            let entry = create_test_entry("LICENSE", false);
            assert_eq!(tables().description_for(&entry), "File");
        }

        #[test]
        fn test_directory_ignores_tables() {
            let tables = LookupTables::new(
                [(".d", "X")].into_iter().collect(),
                [(".d", "Y")].into_iter().collect(),
            );
            let entry = create_test_entry("conf.d", true);
            assert_eq!(tables.icon_for(&entry), FOLDER_ICON);
            assert_eq!(tables.description_for(&entry), FOLDER_DESCRIPTION);
        }
    }
}
