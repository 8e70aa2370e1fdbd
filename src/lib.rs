//! cliexplorer - a terminal file browser library
//!
//! Lists directories as fixed-width tables and turns prompt commands into
//! navigation: entering folders, going up, opening files with the OS handler.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod file_opener;
pub mod logging;
pub mod tui;

// Re-export primary types for convenience
pub use config::LookupTables;
pub use domain::session::{Session, Transition};
pub use domain::{list_directory, DirectoryEntry, SortField, SortSpec};
pub use error::{ExplorerError, Result};
pub use file_opener::{open_file, Opener, SystemOpener};
