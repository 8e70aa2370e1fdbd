// Formatting helpers for table cells

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub const ELLIPSIS: &str = "...";

/// Human-readable size with binary (1024) steps and two decimals,
/// e.g. `1536` -> `"1.50 KB"`
pub fn format_file_size(bytes: u64) -> String {
    scale_size(bytes as f64)
}

fn scale_size(mut num: f64) -> String {
    for unit in ["", "K", "M", "G", "T", "P", "E", "Z"] {
        if num.abs() < 1024.0 {
            return format!("{:.2} {}B", num, unit);
        }
        num /= 1024.0;
    }
    format!("{:.2} YB", num)
}

/// `DD-MM-YYYY HH:MM` in the timestamp's own time zone
pub fn format_timestamp<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%d-%m-%Y %H:%M").to_string()
}

/// Cuts `name` to `width` characters, ending in `...` when it was longer
pub fn truncate_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = name.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Keeps the rightmost part of `path` so the result fits in `width`
/// characters, prefixed by `...` when anything was dropped
pub fn fit_path_left(path: &str, width: usize) -> String {
    let len = path.chars().count();
    if len <= width {
        return path.to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let tail: String = path.chars().skip(len - keep).collect();
    format!("{}{}", ELLIPSIS, tail)
}

/// Number of decimal digits in `n`
pub fn digit_count(n: usize) -> usize {
    n.to_string().len()
}
