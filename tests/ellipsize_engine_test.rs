use ellipsize::tui::{char_len, LineLayout, LineSpacing, TextLayout};
use ellipsize::{
    compute_display_text, compute_display_text_with, MaxLines, StartStrategy, Truncation,
    TruncationMode,
};
use rstest::rstest;

const FOX: &str = "The quick brown fox jumps over the lazy dog";

fn layout_at(width: usize) -> impl Fn(&str) -> TextLayout {
    move |text: &str| TextLayout::measure(text, width, LineSpacing::default())
}

fn line_count(text: &str, width: usize) -> usize {
    TextLayout::measure(text, width, LineSpacing::default()).line_count()
}

/// Layout with fixed line ends, whatever the text.
struct FixedLayout(Vec<usize>);

impl LineLayout for FixedLayout {
    fn line_count(&self) -> usize {
        self.0.len()
    }

    fn line_end(&self, line: usize) -> Option<usize> {
        self.0.get(line).copied()
    }
}

fn fixed(ends: &'static [usize]) -> impl Fn(&str) -> FixedLayout {
    move |_: &str| FixedLayout(ends.to_vec())
}

fn unchanged(text: &str) -> Truncation {
    Truncation {
        text: text.to_string(),
        ellipsized: false,
    }
}

#[rstest]
#[case(TruncationMode::None)]
#[case(TruncationMode::Start)]
#[case(TruncationMode::Middle)]
#[case(TruncationMode::End)]
fn unbounded_never_truncates(#[case] mode: TruncationMode) {
    for text in ["", FOX, "a\nb\nc\nd"] {
        let result = compute_display_text(text, MaxLines::Unbounded, mode, "...", layout_at(5));
        assert_eq!(result, unchanged(text));
    }
}

#[rstest]
#[case(TruncationMode::Start)]
#[case(TruncationMode::Middle)]
#[case(TruncationMode::End)]
fn text_within_the_limit_is_untouched(#[case] mode: TruncationMode) {
    let result = compute_display_text(FOX, MaxLines::Lines(3), mode, "...", layout_at(20));
    assert_eq!(result, unchanged(FOX));
}

#[test]
fn end_drops_trailing_words_until_marker_fits() {
    let result = compute_display_text(
        FOX,
        MaxLines::Lines(1),
        TruncationMode::End,
        "...",
        layout_at(20),
    );

    assert!(result.ellipsized);
    assert_eq!(result.text, "The quick brown...");
    assert!(result.text.ends_with("..."));
    assert_eq!(line_count(&result.text, 20), 1);
}

#[test]
fn end_keeps_as_many_lines_as_allowed() {
    let result = compute_display_text(
        FOX,
        MaxLines::Lines(2),
        TruncationMode::End,
        "...",
        layout_at(20),
    );

    assert!(result.ellipsized);
    assert_eq!(result.text, "The quick brown fox jumps over the...");
    assert_eq!(line_count(&result.text, 20), 2);
}

#[test]
fn end_accepts_overflow_when_no_word_boundary_is_left() {
    let text = "abcdefghijklmnopqrstuvwxyz";
    let result = compute_display_text(
        text,
        MaxLines::Lines(1),
        TruncationMode::End,
        "...",
        layout_at(10),
    );

    assert!(result.ellipsized);
    assert_eq!(result.text, "abcdefghij...");
    // Best effort: a single word cannot be shortened any further.
    assert_eq!(line_count(&result.text, 10), 2);
}

#[test]
fn end_uses_a_custom_marker() {
    let result = compute_display_text(
        FOX,
        MaxLines::Lines(1),
        TruncationMode::End,
        "…",
        layout_at(20),
    );

    assert_eq!(result.text, "The quick brown fox…");
}

#[test]
fn middle_removes_span_around_the_centre_of_the_text() {
    let result = compute_display_text(
        FOX,
        MaxLines::Lines(1),
        TruncationMode::Middle,
        "...",
        layout_at(20),
    );

    assert!(result.ellipsized);
    assert_eq!(result.text, "The quick...e lazy dog");

    let len = char_len(FOX);
    let half = (len - 20 + 1) / 2;
    let pre_end = len / 2 - half;
    let post_start = len / 2 + half;
    assert_eq!(len / 2 - pre_end, post_start - len / 2);
    assert_eq!(char_len(&result.text), pre_end + 3 + (len - post_start));
}

#[test]
fn middle_clamps_to_the_ends_of_the_text() {
    let result = compute_display_text(
        "0123456789",
        MaxLines::Lines(1),
        TruncationMode::Middle,
        "...",
        fixed(&[2, 10]),
    );
    assert_eq!(result.text, "0...9");

    let result = compute_display_text(
        "0123456789",
        MaxLines::Lines(1),
        TruncationMode::Middle,
        "...",
        fixed(&[1, 10]),
    );
    assert_eq!(result.text, "...");
    assert!(result.ellipsized);
}

#[test]
fn middle_counts_characters_not_bytes() {
    let text = "äöü".repeat(10);
    let result = compute_display_text(
        &text,
        MaxLines::Lines(1),
        TruncationMode::Middle,
        "...",
        layout_at(10),
    );

    assert_eq!(result.text, "äöüäö...öüäöü");
}

#[test]
fn mirror_start_keeps_text_between_mirrored_offsets() {
    let result = compute_display_text(
        FOX,
        MaxLines::Lines(2),
        TruncationMode::Start,
        "...",
        layout_at(20),
    );

    assert!(result.ellipsized);
    assert_eq!(result.text, "...quick brown fox jumps over the lazy");
}

#[test]
fn mirror_start_falls_back_when_offsets_cross() {
    let result = compute_display_text(
        FOX,
        MaxLines::Lines(1),
        TruncationMode::Start,
        "...",
        layout_at(20),
    );

    assert_eq!(result, unchanged(FOX));
}

#[test]
fn trailing_start_drops_leading_words_until_it_fits() {
    let result = compute_display_text_with(
        FOX,
        MaxLines::Lines(1),
        TruncationMode::Start,
        "...",
        StartStrategy::Trailing,
        layout_at(20),
    );

    assert!(result.ellipsized);
    assert_eq!(result.text, "...over the lazy dog");
    assert_eq!(line_count(&result.text, 20), 1);
}

#[test]
fn none_mode_leaves_overflowing_text_alone() {
    let result = compute_display_text(
        FOX,
        MaxLines::Lines(1),
        TruncationMode::None,
        "...",
        layout_at(20),
    );

    assert_eq!(result, unchanged(FOX));
}

#[rstest]
#[case(TruncationMode::Start)]
#[case(TruncationMode::Middle)]
#[case(TruncationMode::End)]
fn zero_line_limit_falls_back_to_full_text(#[case] mode: TruncationMode) {
    let result = compute_display_text(FOX, MaxLines::Lines(0), mode, "...", layout_at(20));
    assert_eq!(result, unchanged(FOX));
}

#[rstest]
#[case(TruncationMode::Start)]
#[case(TruncationMode::Middle)]
#[case(TruncationMode::End)]
fn line_ends_past_the_text_fall_back_to_full_text(#[case] mode: TruncationMode) {
    let result = compute_display_text(
        "short",
        MaxLines::Lines(1),
        mode,
        "...",
        fixed(&[40, 80]),
    );
    assert_eq!(result, unchanged("short"));
}

#[test]
fn result_derives_from_full_text_every_time() {
    let first = compute_display_text(
        FOX,
        MaxLines::Lines(1),
        TruncationMode::End,
        "...",
        layout_at(20),
    );
    let second = compute_display_text(
        FOX,
        MaxLines::Lines(1),
        TruncationMode::End,
        "...",
        layout_at(20),
    );
    assert_eq!(first, second);
}
