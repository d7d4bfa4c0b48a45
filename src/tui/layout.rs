use unicode_segmentation::UnicodeSegmentation;

use super::utils::{char_len, char_slice, grapheme_width};

/// Measured wrapping of a string into visual lines.
///
/// Offsets are character offsets into the measured string. `line_end` points
/// just past the last character of the line, so it includes any spaces left
/// hanging at the break and the `\n` that closed a paragraph.
pub trait LineLayout {
    fn line_count(&self) -> usize;
    fn line_end(&self, line: usize) -> Option<usize>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSpacing {
    pub extra: f32,
    pub multiplier: f32,
}

impl LineSpacing {
    pub fn new(extra: f32, multiplier: f32) -> Self {
        Self { extra, multiplier }
    }

    /// Blank rows rendered between two lines. Cells have a fixed height, so
    /// spacing only ever adds whole rows.
    pub fn gap_rows(&self) -> usize {
        let gap = (self.multiplier - 1.0 + self.extra).round();
        if gap.is_finite() && gap > 0.0 {
            gap as usize
        } else {
            0
        }
    }
}

impl Default for LineSpacing {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLayout {
    line_ends: Vec<usize>,
    gap_rows: usize,
}

impl TextLayout {
    pub fn measure(text: &str, width: usize, spacing: LineSpacing) -> Self {
        let width = width.max(1);
        let mut line_ends = Vec::new();
        let mut offset = 0;
        let mut paragraphs = text.split('\n').peekable();

        while let Some(paragraph) = paragraphs.next() {
            wrap_paragraph(paragraph, offset, width, &mut line_ends);
            offset += char_len(paragraph);
            if paragraphs.peek().is_some() {
                offset += 1;
                if let Some(last) = line_ends.last_mut() {
                    *last = offset;
                }
            }
        }

        Self {
            line_ends,
            gap_rows: spacing.gap_rows(),
        }
    }

    pub fn gap_rows(&self) -> usize {
        self.gap_rows
    }

    /// Rows needed to show every line, spacing included.
    pub fn height(&self) -> usize {
        let lines = self.line_ends.len();
        lines + self.gap_rows * lines.saturating_sub(1)
    }

    /// The visual lines of `text`, without the hanging spaces or newline.
    /// `text` must be the string this layout was measured from.
    pub fn lines<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut start = 0;
        self.line_ends
            .iter()
            .map(|&end| {
                let line = char_slice(text, start, end).unwrap_or_default();
                start = end;
                line.trim_end_matches('\n').trim_end_matches(' ')
            })
            .collect()
    }
}

impl LineLayout for TextLayout {
    fn line_count(&self) -> usize {
        self.line_ends.len()
    }

    fn line_end(&self, line: usize) -> Option<usize> {
        self.line_ends.get(line).copied()
    }
}

/// Host-side `measureLineLayout`: wraps `text` into `width` cells.
pub fn measure_line_layout(text: &str, width: usize, spacing: LineSpacing) -> TextLayout {
    TextLayout::measure(text, width, spacing)
}

#[derive(Debug)]
struct Token {
    start: usize,
    width: usize,
    is_space: bool,
    graphemes: Vec<(usize, usize)>,
}

fn split_into_tokens(paragraph: &str, base: usize) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut offset = base;

    for grapheme in UnicodeSegmentation::graphemes(paragraph, true) {
        let is_space = grapheme == " ";
        let width = grapheme_width(grapheme);
        match tokens.last_mut() {
            Some(token) if token.is_space == is_space => {
                token.width += width;
                token.graphemes.push((offset, width));
            }
            _ => tokens.push(Token {
                start: offset,
                width,
                is_space,
                graphemes: vec![(offset, width)],
            }),
        }
        offset += char_len(grapheme);
    }

    tokens
}

fn wrap_paragraph(paragraph: &str, base: usize, width: usize, line_ends: &mut Vec<usize>) {
    let mut content_width = 0;
    let mut pending_space = 0;
    let mut has_content = false;

    for token in split_into_tokens(paragraph, base) {
        if token.is_space {
            pending_space += token.width;
            continue;
        }

        let mut current = if has_content {
            content_width + pending_space
        } else {
            pending_space
        };
        if has_content && current + token.width > width {
            line_ends.push(token.start);
            current = 0;
        }

        if current + token.width <= width {
            content_width = current + token.width;
        } else {
            for (offset, cells) in token.graphemes {
                if current > 0 && current + cells > width {
                    line_ends.push(offset);
                    current = 0;
                }
                current += cells;
            }
            content_width = current;
        }

        pending_space = 0;
        has_content = true;
    }

    line_ends.push(base + char_len(paragraph));
}
