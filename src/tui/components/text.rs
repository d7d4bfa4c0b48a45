use super::Component;
use crate::tui::layout::{LineSpacing, TextLayout};
use crate::tui::utils::{truncate_to_cells, visible_width};

/// Plain wrapped text, padded to the full render width.
pub struct Text {
    text: String,
    padding_x: usize,
    max_lines: Option<usize>,
    line_spacing: LineSpacing,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            padding_x: 0,
            max_lines: None,
            line_spacing: LineSpacing::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn padding_x(&self) -> usize {
        self.padding_x
    }

    pub fn set_padding_x(&mut self, padding_x: usize) {
        self.padding_x = padding_x;
    }

    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    /// Rows past `max_lines` are clipped, never ellipsized.
    pub fn set_max_lines(&mut self, max_lines: Option<usize>) {
        self.max_lines = max_lines;
    }

    pub fn line_spacing(&self) -> LineSpacing {
        self.line_spacing
    }

    pub fn set_line_spacing(&mut self, line_spacing: LineSpacing) {
        self.line_spacing = line_spacing;
    }

    /// Width left for text once the horizontal insets are taken.
    pub fn content_width(&self, width: usize) -> usize {
        width.saturating_sub(self.padding_x * 2).max(1)
    }

    pub fn measure(&self, text: &str, width: usize) -> TextLayout {
        TextLayout::measure(text, self.content_width(width), self.line_spacing)
    }
}

impl Component for Text {
    fn render(&mut self, width: usize) -> Vec<String> {
        let layout = self.measure(&self.text, width);
        let mut lines = layout.lines(&self.text);
        if let Some(max_lines) = self.max_lines {
            lines.truncate(max_lines);
        }

        let empty_line = " ".repeat(width);
        let left_padding = " ".repeat(self.padding_x.min(width.saturating_sub(1)));
        let mut result = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            if index > 0 {
                for _ in 0..layout.gap_rows() {
                    result.push(empty_line.clone());
                }
            }
            let line_with_padding = format!("{left_padding}{line}");
            let line_with_padding = if visible_width(&line_with_padding) > width {
                truncate_to_cells(&line_with_padding, width)
            } else {
                line_with_padding
            };
            let padding_needed = width.saturating_sub(visible_width(&line_with_padding));
            result.push(format!("{line_with_padding}{}", " ".repeat(padding_needed)));
        }

        result
    }

    fn invalidate(&mut self) {}
}
