use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

use crate::cli::args::Args;
use crate::config::EllipsizeStyle;
use crate::tui::{Component, EllipsizingText};

pub const ENV_LOG_FILTER: &str = "ELLIPSIZE_LOG";
const FALLBACK_WIDTH: usize = 80;

pub fn print_help() {
    println!(
        "ellipsize: fit text into a fixed number of lines

Usage:
  ellipsize [options] [text...]

Options:
  --help, -h             Show this help
  --version, -v          Show version
  --max-lines, -n <n>    Maximum visible lines (-1 for unbounded)
  --mode, -m <mode>      Marker position: none (default), start, middle, end
  --marker <text>        Substitution marker (default \"...\")
  --strategy <name>      Start mode policy: mirror (default), trailing
  --width, -w <n>        Render width in cells (default: terminal width)
  --padding <n>          Horizontal inset on each side
  --style <file>         JSON style file (also read from ELLIPSIZE_STYLE)
  --json                 Print text, ellipsized flag and lines as JSON

Text is read from stdin when no text arguments are given.
Set ELLIPSIZE_LOG (e.g. debug) to control log output on stderr."
    );
}

pub fn init_logging() {
    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Requested width, else the terminal width, else 80 columns.
pub fn resolve_width(requested: Option<usize>) -> usize {
    if let Some(width) = requested {
        return width;
    }
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => usize::from(columns),
        _ => FALLBACK_WIDTH,
    }
}

pub fn read_input(args: &Args) -> io::Result<String> {
    if !args.messages.is_empty() {
        return Ok(args.messages.join(" "));
    }
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(strip_final_newline(input))
}

fn strip_final_newline(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub text: String,
    pub ellipsized: bool,
    pub lines: Vec<String>,
}

pub fn ellipsize_text(text: &str, style: &EllipsizeStyle, width: usize) -> Report {
    let mut view = EllipsizingText::from_style(text, style);

    let lines = view
        .render(width)
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect();

    Report {
        text: view.display_text().to_string(),
        ellipsized: view.is_ellipsized(),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_trailing_newline() {
        assert_eq!(strip_final_newline("abc\n".to_string()), "abc");
        assert_eq!(strip_final_newline("abc\r\n".to_string()), "abc");
        assert_eq!(strip_final_newline("abc\n\n".to_string()), "abc\n");
        assert_eq!(strip_final_newline("abc".to_string()), "abc");
    }

    #[test]
    fn requested_width_wins() {
        assert_eq!(resolve_width(Some(33)), 33);
    }
}
