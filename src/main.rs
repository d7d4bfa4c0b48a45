use ellipsize::cli::runtime::{
    ellipsize_text, init_logging, print_help, read_input, resolve_width,
};
use ellipsize::config::load_style;
use ellipsize::{parse_args, OutputFormat};
use std::env;
use std::path::Path;
use std::process;

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = parse_args(&args);

    if parsed.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if parsed.help {
        print_help();
        return;
    }

    let mut style = match load_style(parsed.style.as_deref().map(Path::new)) {
        Ok(style) => style,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };
    parsed.apply_to(&mut style);

    let text = match read_input(&parsed) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: Failed to read stdin: {err}");
            process::exit(1);
        }
    };

    let report = ellipsize_text(&text, &style, resolve_width(parsed.width));

    match parsed.output {
        OutputFormat::Text => {
            for line in &report.lines {
                println!("{line}");
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: Failed to encode report: {err}");
                process::exit(1);
            }
        },
    }
}
