// CLI module for argument parsing and configuration

use crate::config::LookupTables;
use crate::domain::SortSpec;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// cliexplorer - browse directories from a plain terminal prompt
///
/// Lists a folder as a table and lets you enter folders or open files by number.
#[derive(Parser, Debug, Clone)]
#[command(name = "cliexplorer")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to start in
    ///
    /// If not specified, defaults to the current directory.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Sort code: folders first (s), field (n/t/e/s), order (h/l)
    ///
    /// Example: "snh" lists folders first, by name, ascending;
    /// "mtl" mixes folders and files, newest first.
    #[arg(short = 's', long = "sort", default_value = "snh")]
    pub sort: String,

    /// JSON file mapping extensions to icons
    ///
    /// Defaults to icons.json in the cliexplorer config directory.
    #[arg(long = "icons")]
    pub icons: Option<PathBuf>,

    /// JSON file mapping extensions to descriptions
    ///
    /// Defaults to descriptions.json in the cliexplorer config directory.
    #[arg(long = "descriptions")]
    pub descriptions: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long = "no-banner", action = ArgAction::SetTrue)]
    pub no_banner: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort.parse().ok()
    }

    /// Explicit path, or the default location in the config directory
    pub fn icons_path(&self) -> Option<PathBuf> {
        self.icons.clone().or_else(LookupTables::default_icons_path)
    }

    pub fn descriptions_path(&self) -> Option<PathBuf> {
        self.descriptions
            .clone()
            .or_else(LookupTables::default_descriptions_path)
    }

    /// Validate the arguments and return any errors
    pub fn validate(&self) -> Result<(), String> {
        if !self.directory.exists() {
            return Err(format!(
                "Directory does not exist: {}",
                self.directory.display()
            ));
        }

        if !self.directory.is_dir() {
            return Err(format!(
                "Path is not a directory: {}",
                self.directory.display()
            ));
        }

        if let Err(e) = self.sort.parse::<SortSpec>() {
            return Err(e.to_string());
        }

        if self.icons_path().is_none() || self.descriptions_path().is_none() {
            return Err(
                "Could not determine config directory; pass --icons and --descriptions"
                    .to_string(),
            );
        }

        Ok(())
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub directory: PathBuf,
    pub sort: SortSpec,
    pub icons_path: PathBuf,
    pub descriptions_path: PathBuf,
    pub show_banner: bool,
}

impl From<Args> for AppConfig {
    /// Expects arguments that passed `Args::validate`
    fn from(args: Args) -> Self {
        AppConfig {
            directory: args.directory.clone(),
            sort: args.sort_spec().unwrap_or_default(),
            icons_path: args.icons_path().unwrap_or_else(|| PathBuf::from("icons.json")),
            descriptions_path: args
                .descriptions_path()
                .unwrap_or_else(|| PathBuf::from("descriptions.json")),
            show_banner: !args.no_banner,
        }
    }
}
