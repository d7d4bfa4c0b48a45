use tracing::warn;

use crate::config::EllipsizeStyle;
use crate::ellipsize::{MaxLines, StartStrategy, TruncationMode};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub max_lines: Option<MaxLines>,
    pub mode: Option<TruncationMode>,
    pub marker: Option<String>,
    pub start_strategy: Option<StartStrategy>,
    pub width: Option<usize>,
    pub padding: Option<usize>,
    pub style: Option<String>,
    pub output: OutputFormat,
    pub help: bool,
    pub version: bool,
    pub messages: Vec<String>,
}

impl Args {
    /// Command line flags win over the loaded style.
    pub fn apply_to(&self, style: &mut EllipsizeStyle) {
        if let Some(max_lines) = self.max_lines {
            style.max_lines = max_lines;
        }
        if let Some(mode) = self.mode {
            style.ellipsize = mode;
        }
        if let Some(marker) = &self.marker {
            style.substitution = marker.clone();
        }
        if let Some(start_strategy) = self.start_strategy {
            style.start_strategy = start_strategy;
        }
        if let Some(padding) = self.padding {
            style.padding_x = padding;
        }
    }
}

pub fn parse_args(args: &[String]) -> Args {
    let mut result = Args::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();

        match arg {
            "--help" | "-h" => {
                result.help = true;
            }
            "--version" | "-v" => {
                result.version = true;
            }
            "--json" => {
                result.output = OutputFormat::Json;
            }
            "--max-lines" | "-n" if i + 1 < args.len() => {
                let value = &args[i + 1];
                match value.parse::<i32>() {
                    Ok(raw) => result.max_lines = Some(MaxLines::from_raw(raw)),
                    Err(_) => warn!("Invalid max lines \"{value}\". Expected an integer, -1 for unbounded"),
                }
                i += 1;
            }
            "--mode" | "-m" if i + 1 < args.len() => {
                let value = &args[i + 1];
                match TruncationMode::parse(value) {
                    Some(mode) => result.mode = Some(mode),
                    None => warn!("Invalid mode \"{value}\". Valid values: none, start, middle, end"),
                }
                i += 1;
            }
            "--marker" if i + 1 < args.len() => {
                result.marker = Some(args[i + 1].clone());
                i += 1;
            }
            "--strategy" if i + 1 < args.len() => {
                let value = &args[i + 1];
                match StartStrategy::parse(value) {
                    Some(strategy) => result.start_strategy = Some(strategy),
                    None => warn!("Invalid start strategy \"{value}\". Valid values: mirror, trailing"),
                }
                i += 1;
            }
            "--width" | "-w" if i + 1 < args.len() => {
                let value = &args[i + 1];
                match value.parse::<usize>() {
                    Ok(width) if width > 0 => result.width = Some(width),
                    _ => warn!("Invalid width \"{value}\". Expected a positive integer"),
                }
                i += 1;
            }
            "--padding" if i + 1 < args.len() => {
                let value = &args[i + 1];
                match value.parse::<usize>() {
                    Ok(padding) => result.padding = Some(padding),
                    Err(_) => warn!("Invalid padding \"{value}\". Expected a non-negative integer"),
                }
                i += 1;
            }
            "--style" if i + 1 < args.len() => {
                result.style = Some(args[i + 1].clone());
                i += 1;
            }
            _ if !arg.starts_with('-') => {
                result.messages.push(arg.to_string());
            }
            _ => {
                warn!("Ignoring unknown option \"{arg}\"");
            }
        }

        i += 1;
    }

    result
}
