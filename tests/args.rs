use ellipsize::config::EllipsizeStyle;
use ellipsize::{parse_args, Args, MaxLines, OutputFormat, StartStrategy, TruncationMode};

fn parse(input: &[&str]) -> Args {
    let args = input
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>();
    parse_args(&args)
}

#[test]
fn parses_version_and_help_flags() {
    let result = parse(&["--version", "--help", "some text"]);
    assert!(result.version);
    assert!(result.help);
    assert_eq!(result.messages, vec!["some text".to_string()]);

    let result = parse(&["-v", "-h"]);
    assert!(result.version);
    assert!(result.help);
}

#[test]
fn parses_max_lines_including_unbounded() {
    let result = parse(&["--max-lines", "3"]);
    assert_eq!(result.max_lines, Some(MaxLines::Lines(3)));

    let result = parse(&["-n", "-1"]);
    assert_eq!(result.max_lines, Some(MaxLines::Unbounded));
}

#[test]
fn ignores_invalid_values() {
    let result = parse(&["--max-lines", "many", "--mode", "sideways", "--width", "0"]);
    assert_eq!(result.max_lines, None);
    assert_eq!(result.mode, None);
    assert_eq!(result.width, None);
    assert!(result.messages.is_empty());
}

#[test]
fn parses_mode_marker_and_strategy() {
    let result = parse(&[
        "--mode",
        "middle",
        "--marker",
        "…",
        "--strategy",
        "trailing",
    ]);
    assert_eq!(result.mode, Some(TruncationMode::Middle));
    assert_eq!(result.marker.as_deref(), Some("…"));
    assert_eq!(result.start_strategy, Some(StartStrategy::Trailing));
}

#[test]
fn parses_geometry_and_output_flags() {
    let result = parse(&["-w", "40", "--padding", "2", "--style", "s.json", "--json"]);
    assert_eq!(result.width, Some(40));
    assert_eq!(result.padding, Some(2));
    assert_eq!(result.style.as_deref(), Some("s.json"));
    assert_eq!(result.output, OutputFormat::Json);
}

#[test]
fn collects_text_arguments_in_order() {
    let result = parse(&["hello", "--bogus", "world"]);
    assert_eq!(
        result.messages,
        vec!["hello".to_string(), "world".to_string()]
    );
    assert_eq!(result.output, OutputFormat::Text);
}

#[test]
fn flags_override_the_loaded_style() {
    let mut style = EllipsizeStyle {
        max_lines: MaxLines::Lines(5),
        ..EllipsizeStyle::default()
    };
    let result = parse(&["--mode", "end", "--marker", "~", "--padding", "1"]);
    result.apply_to(&mut style);

    assert_eq!(style.max_lines, MaxLines::Lines(5));
    assert_eq!(style.ellipsize, TruncationMode::End);
    assert_eq!(style.substitution, "~");
    assert_eq!(style.padding_x, 1);
}
