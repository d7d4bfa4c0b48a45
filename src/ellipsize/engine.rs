use tracing::{debug, warn};

use super::{EllipsizeError, MaxLines, StartStrategy, TruncationMode};
use crate::tui::layout::LineLayout;
use crate::tui::utils::{char_len, char_slice};

pub const DEFAULT_SUBSTITUTION: &str = "...";

/// Text to display, and whether it was shortened to get there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Truncation {
    pub text: String,
    pub ellipsized: bool,
}

impl Truncation {
    fn unchanged(full_text: &str) -> Self {
        Self {
            text: full_text.to_string(),
            ellipsized: false,
        }
    }
}

pub fn compute_display_text<L, F>(
    full_text: &str,
    max_lines: MaxLines,
    mode: TruncationMode,
    marker: &str,
    layout_fn: F,
) -> Truncation
where
    L: LineLayout,
    F: Fn(&str) -> L,
{
    compute_display_text_with(
        full_text,
        max_lines,
        mode,
        marker,
        StartStrategy::default(),
        layout_fn,
    )
}

/// Derives the displayed text from the full text. Always starts from
/// `full_text`, so repeated calls never compound.
///
/// Geometry failures (a layout without the requested line, a zero line limit,
/// substring bounds outside the text) never escape: the full text is shown
/// and the result is reported as not ellipsized.
pub fn compute_display_text_with<L, F>(
    full_text: &str,
    max_lines: MaxLines,
    mode: TruncationMode,
    marker: &str,
    start_strategy: StartStrategy,
    layout_fn: F,
) -> Truncation
where
    L: LineLayout,
    F: Fn(&str) -> L,
{
    let Some(limit) = max_lines.limit() else {
        return Truncation::unchanged(full_text);
    };

    let layout = layout_fn(full_text);
    if layout.line_count() <= limit {
        return Truncation::unchanged(full_text);
    }

    let result = match mode {
        TruncationMode::None => return Truncation::unchanged(full_text),
        TruncationMode::End => truncate_end(full_text, limit, marker, &layout, &layout_fn),
        TruncationMode::Middle => truncate_middle(full_text, limit, marker, &layout),
        TruncationMode::Start => match start_strategy {
            StartStrategy::Mirror => truncate_start_mirror(full_text, limit, marker, &layout),
            StartStrategy::Trailing => {
                truncate_start_trailing(full_text, limit, marker, &layout, &layout_fn)
            }
        },
    };

    match result {
        Ok(text) => {
            debug!(
                mode = mode.as_str(),
                max_lines = limit,
                line_count = layout.line_count(),
                "ellipsized text"
            );
            Truncation {
                text,
                ellipsized: true,
            }
        }
        Err(err) => {
            warn!(
                error = %err,
                mode = mode.as_str(),
                max_lines = limit,
                "cannot ellipsize, showing full text"
            );
            Truncation::unchanged(full_text)
        }
    }
}

fn last_line_end(layout: &impl LineLayout, max_lines: usize) -> Result<usize, EllipsizeError> {
    let line = max_lines
        .checked_sub(1)
        .ok_or(EllipsizeError::ZeroMaxLines)?;
    layout
        .line_end(line)
        .ok_or(EllipsizeError::LineOutOfRange {
            line,
            line_count: layout.line_count(),
        })
}

fn truncate_end<L, F>(
    full_text: &str,
    max_lines: usize,
    marker: &str,
    layout: &L,
    layout_fn: &F,
) -> Result<String, EllipsizeError>
where
    L: LineLayout,
    F: Fn(&str) -> L,
{
    let cut = last_line_end(layout, max_lines)?;
    let mut working = char_slice(full_text, 0, cut)?.trim();

    // Best effort: a single overlong word stays even if it still overflows.
    while layout_fn(&format!("{working}{marker}")).line_count() > max_lines {
        match working.rfind(' ') {
            Some(index) => working = &working[..index],
            None => break,
        }
    }

    Ok(format!("{working}{marker}"))
}

fn truncate_middle<L: LineLayout>(
    full_text: &str,
    max_lines: usize,
    marker: &str,
    layout: &L,
) -> Result<String, EllipsizeError> {
    let cut = last_line_end(layout, max_lines)?;
    let len = char_len(full_text);
    let span = len
        .checked_sub(cut)
        .ok_or(EllipsizeError::SliceOutOfRange {
            start: cut,
            end: len,
            len,
        })?;

    // The dropped span is centred on the middle of the whole text, not on
    // the line break it was measured from.
    let half = (span + 1) / 2;
    let middle = len / 2;
    let pre_end = middle.saturating_sub(half);
    let post_start = (middle + half).min(len);

    Ok(format!(
        "{}{marker}{}",
        char_slice(full_text, 0, pre_end)?,
        char_slice(full_text, post_start, len)?
    ))
}

fn truncate_start_mirror<L: LineLayout>(
    full_text: &str,
    max_lines: usize,
    marker: &str,
    layout: &L,
) -> Result<String, EllipsizeError> {
    let cut = last_line_end(layout, max_lines)?;
    let len = char_len(full_text);
    let start = len
        .checked_sub(cut)
        .ok_or(EllipsizeError::SliceOutOfRange {
            start: cut,
            end: len,
            len,
        })?;
    let tail = char_slice(full_text, start, cut)?.trim();
    Ok(format!("{marker}{tail}"))
}

fn truncate_start_trailing<L, F>(
    full_text: &str,
    max_lines: usize,
    marker: &str,
    layout: &L,
    layout_fn: &F,
) -> Result<String, EllipsizeError>
where
    L: LineLayout,
    F: Fn(&str) -> L,
{
    last_line_end(layout, max_lines)?;
    let mut working = full_text.trim();

    while layout_fn(&format!("{marker}{working}")).line_count() > max_lines {
        match working.find(' ') {
            Some(index) => working = working[index..].trim_start(),
            None => break,
        }
    }

    Ok(format!("{marker}{working}"))
}
