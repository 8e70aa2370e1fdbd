use std::path::PathBuf;

/// Represents one parsed prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit the application
    Quit,
    /// Go to the parent directory
    Up,
    /// Open the N-th entry of the listing (1-based, as typed)
    OpenIndex(i64),
    /// Open a literal path
    OpenPath(PathBuf),
    /// Blank line, just re-render
    Refresh,
    /// Anything else
    Unknown(String),
}

/// Maps a line typed at the prompt to a command
///
/// Only the line terminator is stripped from a path, so names ending in
/// spaces can still be opened.
pub fn parse_command(line: &str) -> Command {
    let line = line
        .trim_end_matches(&['\r', '\n'][..])
        .trim_start();
    let word = line.trim_end();

    if word.is_empty() {
        return Command::Refresh;
    }

    if word == "q" {
        return Command::Quit;
    }

    let Some(target) = line.strip_prefix("o ").map(str::trim_start) else {
        return Command::Unknown(word.to_string());
    };

    match target.trim_end() {
        "." => Command::Up,
        "" => Command::Unknown(word.to_string()),
        trimmed => match trimmed.parse::<i64>() {
            Ok(index) => Command::OpenIndex(index),
            Err(_) => Command::OpenPath(PathBuf::from(target)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit() {
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("q\n"), Command::Quit);
        assert_eq!(parse_command("  q  "), Command::Quit);
    }

    #[test]
    fn test_up() {
        assert_eq!(parse_command("o ."), Command::Up);
        assert_eq!(parse_command("o   .\r\n"), Command::Up);
    }

    #[test]
    fn test_open_index() {
        assert_eq!(parse_command("o 3"), Command::OpenIndex(3));
        assert_eq!(parse_command("o 0"), Command::OpenIndex(0));
        assert_eq!(parse_command("o -2"), Command::OpenIndex(-2));
    }

    #[test]
    fn test_open_path() {
        assert_eq!(
            parse_command("o /tmp/some dir"),
            Command::OpenPath(PathBuf::from("/tmp/some dir"))
        );
        assert_eq!(parse_command("o .."), Command::OpenPath(PathBuf::from("..")));
        // Leading letters of the path are not eaten with the command prefix
        assert_eq!(parse_command("o out.log"), Command::OpenPath(PathBuf::from("out.log")));
        assert_eq!(parse_command("o 3rd.txt"), Command::OpenPath(PathBuf::from("3rd.txt")));
    }

    #[test]
    fn test_open_path_keeps_trailing_spaces() {
        assert_eq!(
            parse_command("o report \n"),
            Command::OpenPath(PathBuf::from("report "))
        );
        assert_eq!(
            parse_command("o  notes .txt  \r\n"),
            Command::OpenPath(PathBuf::from("notes .txt  "))
        );
        assert_eq!(parse_command("o 7  \n"), Command::OpenIndex(7));
    }

    #[test]
    fn test_refresh() {
        assert_eq!(parse_command(""), Command::Refresh);
        assert_eq!(parse_command("   \n"), Command::Refresh);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(parse_command("x"), Command::Unknown("x".to_string()));
        assert_eq!(parse_command("quit"), Command::Unknown("quit".to_string()));
        assert_eq!(parse_command("o"), Command::Unknown("o".to_string()));
        assert_eq!(parse_command("open 1"), Command::Unknown("open 1".to_string()));
    }
}
