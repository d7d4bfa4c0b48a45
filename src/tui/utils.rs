use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ellipsize::EllipsizeError;

fn is_pure_ascii_printable(text: &str) -> bool {
    text.bytes().all(|byte| (0x20..=0x7e).contains(&byte))
}

pub(crate) fn grapheme_width(grapheme: &str) -> usize {
    if grapheme == "\t" {
        return 3;
    }
    UnicodeWidthStr::width(grapheme)
}

pub fn visible_width(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    if is_pure_ascii_printable(text) {
        return text.len();
    }

    UnicodeSegmentation::graphemes(text, true)
        .map(grapheme_width)
        .sum()
}

/// Longest grapheme prefix of `text` that fits in `max_width` cells.
pub fn truncate_to_cells(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    for grapheme in UnicodeSegmentation::graphemes(text, true) {
        let width = grapheme_width(grapheme);
        if current_width + width > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += width;
    }
    result
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn byte_offset(text: &str, char_offset: usize) -> Option<usize> {
    if char_offset == 0 {
        return Some(0);
    }
    match text.char_indices().nth(char_offset) {
        Some((index, _)) => Some(index),
        None if char_len(text) == char_offset => Some(text.len()),
        None => None,
    }
}

/// Substring by character offsets. Bounds past the end or an inverted range
/// are reported instead of panicking.
pub fn char_slice(text: &str, start: usize, end: usize) -> Result<&str, EllipsizeError> {
    let out_of_range = || EllipsizeError::SliceOutOfRange {
        start,
        end,
        len: char_len(text),
    };
    if start > end {
        return Err(out_of_range());
    }
    let from = byte_offset(text, start).ok_or_else(out_of_range)?;
    let to = byte_offset(text, end).ok_or_else(out_of_range)?;
    Ok(&text[from..to])
}
