// TUI module: builds the listing table and writes it to the terminal
pub mod helpers;
pub mod input;

// Re-exports
pub use helpers::{fit_path_left, format_file_size, format_timestamp, truncate_name};
pub use input::{parse_command, Command};

use crate::config::LookupTables;
use crate::domain::DirectoryEntry;
use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

/// Display width of the name column
pub const NAME_WIDTH: usize = 20;

const MIN_NO_WIDTH: usize = 2;
const MIN_TYPE_WIDTH: usize = 4;
const MIN_DESCRIPTION_WIDTH: usize = 11;
/// Borders, separators and the fixed-size time and size columns
const FIXED_WIDTH: usize = 46;
const SIZE_WIDTH: usize = 10;

pub const PROMPT: &str = ">>> ";

const LOGO: &str = r#"
  ____ _     ___ _____            _
 / ___| |   |_ _| ____|_  ___ __ | | ___  _ __ ___ _ __
| |   | |    | ||  _| \ \/ / '_ \| |/ _ \| '__/ _ \ '__|
| |___| |___ | || |___ >  <| |_) | | (_) | | |  __/ |
 \____|_____|___|_____/_/\_\ .__/|_|\___/|_|  \___|_|
                           |_|
"#;

/// Column widths measured from the listing being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub no: usize,
    pub name: usize,
    pub kind: usize,
    pub description: usize,
}

impl ColumnWidths {
    pub fn measure(entries: &[DirectoryEntry], tables: &LookupTables) -> Self {
        let kind = entries
            .iter()
            .map(|e| e.type_label().chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_TYPE_WIDTH);

        let description = entries
            .iter()
            .map(|e| tables.description_for(e).chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_DESCRIPTION_WIDTH);

        ColumnWidths {
            no: helpers::digit_count(entries.len()).max(MIN_NO_WIDTH),
            name: NAME_WIDTH,
            kind,
            description,
        }
    }

    /// Width between the outer `|` borders
    pub fn table_width(&self) -> usize {
        FIXED_WIDTH + self.no + self.name + self.kind + self.description
    }
}

/// Builds the full table for `dir` as text, one line per row.
///
/// Glyphs are assumed to take two terminal columns, like most emoji.
pub fn build_table(dir: &Path, entries: &[DirectoryEntry], tables: &LookupTables) -> String {
    let widths = ColumnWidths::measure(entries, tables);
    let width = widths.table_width();
    let mut out = String::new();

    let path = fit_path_left(&dir.display().to_string(), width - 2);

    // writeln! into a String cannot fail
    let _ = writeln!(out, "|{}|", "‾".repeat(width));
    let _ = writeln!(out, "| {:^w$} |", path, w = width - 2);
    let _ = writeln!(out, "|{}|", " ".repeat(width));
    let _ = writeln!(out, "{}", column_rule(&widths, "‾"));
    let _ = writeln!(
        out,
        "|{:^no$}|{:^name$}|    Last edit     |    Size    |{:^kind$}| {:^desc$} |",
        "No",
        "Name",
        "Type",
        "Description",
        no = widths.no + 2,
        name = widths.name + 5,
        kind = widths.kind + 2,
        desc = widths.description,
    );
    let _ = writeln!(out, "{}", column_rule(&widths, "-"));

    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "{}", render_row(i + 1, entry, tables, &widths));
    }

    let _ = writeln!(out, "|{}|", "‾".repeat(width));
    let _ = writeln!(out, "|{:^w$}|", footer_text(), w = width);
    let _ = writeln!(out, "|{}|", "_".repeat(width));

    out
}

fn column_rule(widths: &ColumnWidths, fill: &str) -> String {
    format!(
        "|{}|{}|{}|{}|{}|{}|",
        fill.repeat(widths.no + 2),
        fill.repeat(widths.name + 5),
        fill.repeat(18),
        fill.repeat(SIZE_WIDTH + 2),
        fill.repeat(widths.kind + 2),
        fill.repeat(widths.description + 2),
    )
}

fn render_row(
    number: usize,
    entry: &DirectoryEntry,
    tables: &LookupTables,
    widths: &ColumnWidths,
) -> String {
    let modified = format_timestamp(&entry.modified_date.with_timezone(&Local));
    let size = entry.size.map(format_file_size).unwrap_or_default();

    format!(
        "| {:0>no$} | {} {:<name$} | {} | {:<size_w$} | {:<kind$} | {:<desc$} |",
        number,
        tables.icon_for(entry),
        truncate_name(&entry.name, widths.name),
        modified,
        size,
        entry.type_label(),
        tables.description_for(entry),
        no = widths.no,
        name = widths.name,
        size_w = SIZE_WIDTH,
        kind = widths.kind,
        desc = widths.description,
    )
}

fn footer_text() -> String {
    format!(
        "cliexplorer v{}  |  o <No|path> open   o . up   q quit",
        env!("CARGO_PKG_VERSION")
    )
}

/// Message shown in place of the table when the directory cannot be read
pub fn render_listing_error(dir: &Path, err: &dyn std::fmt::Display) -> String {
    format!("Cannot list {}: {}\n", dir.display(), err)
}

pub fn welcome_text() -> String {
    format!(
        "Welcome to:\n{}{:>46}\n",
        LOGO,
        format!("v {}", env!("CARGO_PKG_VERSION"))
    )
}

pub fn farewell_text() -> String {
    format!("Thanks for using:\n{}", LOGO)
}

/// Clears the terminal and moves the cursor to the top-left corner
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Clears the terminal, then prints `text`
pub fn display<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    clear_screen(out)?;
    out.write_all(text.as_bytes())?;
    out.flush()
}
