use cliexplorer::cli::{AppConfig, Args};
use cliexplorer::logging::init_logging;
use cliexplorer::tui::{
    clear_screen, display, farewell_text, parse_command, render_listing_error, welcome_text,
    PROMPT,
};
use cliexplorer::{LookupTables, Opener, Session, SystemOpener, Transition};

use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Convert to config
    let config: AppConfig = args.into();

    init_logging();

    // Lookup tables are required; nothing is shown without them
    let tables = match LookupTables::load(&config.icons_path, &config.descriptions_path) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut session = match Session::new(&config.directory, config.sort, tables) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::debug!(
        dir = %session.current_dir().display(),
        sort = %session.sort_spec(),
        "session started"
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    if config.show_banner {
        display(&mut stdout, &welcome_text())?;
        write!(stdout, "Press Enter to continue.")?;
        stdout.flush()?;
        read_input_line(&mut input)?;
    }

    run_loop(&mut session, &SystemOpener, &mut input, &mut stdout)
}

/// Reads one line, replacing bytes that are not UTF-8; `None` at end of input
fn read_input_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Render, read one command, apply it, repeat until `q` or end of input
fn run_loop<R: BufRead, W: Write>(
    session: &mut Session,
    opener: &dyn Opener,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    // Shown under the next table, then cleared
    let mut status: Option<String> = None;

    loop {
        let screen = match session.render() {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(error = %e, "failed to list directory");
                render_listing_error(session.current_dir(), &e)
            }
        };
        display(out, &screen)?;

        if let Some(message) = status.take() {
            writeln!(out, "{}", message)?;
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = read_input_line(input)? else {
            // End of input behaves like `q`
            break;
        };

        match session.apply(parse_command(&line), opener) {
            Ok(Transition::Quit) => break,
            Ok(Transition::Unrecognized(cmd)) => {
                status = Some(format!(
                    "Unknown command '{}'. Use: o <No>, o <path>, o . (up), q (quit)",
                    cmd
                ));
            }
            Ok(Transition::Opened(path)) => {
                status = Some(format!("Opened {}", path.display()));
            }
            Ok(Transition::Entered(_)) | Ok(Transition::Stayed) => {}
            Err(e) => {
                tracing::warn!(error = %e, "command failed");
                status = Some(format!("Error: {}", e));
            }
        }
    }

    clear_screen(out)?;
    write!(out, "{}", farewell_text())?;
    out.flush()
}
