use std::rc::Rc;

use tracing::trace;

use super::{Component, Text};
use crate::config::EllipsizeStyle;
use crate::ellipsize::{
    compute_display_text_with, EllipsizeError, MaxLines, StartStrategy, TruncationMode,
    DEFAULT_SUBSTITUTION,
};
use crate::tui::layout::LineSpacing;

pub trait EllipsizeListener {
    fn ellipsize_state_changed(&self, ellipsized: bool);
}

impl<F: Fn(bool)> EllipsizeListener for F {
    fn ellipsize_state_changed(&self, ellipsized: bool) {
        self(ellipsized)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Text that ellipsizes itself to a maximum number of lines.
///
/// Wraps a [`Text`] surface. Input changes only mark the view stale; the
/// displayed text is recomputed from the full text on the next render and
/// written back to the surface. Listeners hear about it only when the
/// ellipsized state flips.
pub struct EllipsizingText {
    surface: Text,
    full_text: String,
    max_lines: MaxLines,
    mode: TruncationMode,
    substitution: String,
    start_strategy: StartStrategy,
    width: Option<usize>,
    ellipsized: bool,
    stale: bool,
    programmatic_change: bool,
    listeners: Vec<(ListenerId, Rc<dyn EllipsizeListener>)>,
    next_listener_id: u64,
}

impl EllipsizingText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            surface: Text::new(text.clone()),
            full_text: text,
            max_lines: MaxLines::Unbounded,
            mode: TruncationMode::None,
            substitution: DEFAULT_SUBSTITUTION.to_string(),
            start_strategy: StartStrategy::default(),
            width: None,
            ellipsized: false,
            stale: true,
            programmatic_change: false,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn from_style(text: impl Into<String>, style: &EllipsizeStyle) -> Self {
        let mut view = Self::new(text);
        view.set_substitution(style.substitution.clone());
        view.set_max_lines(style.max_lines);
        view.set_truncation_mode(style.ellipsize);
        view.set_start_strategy(style.start_strategy);
        view.set_line_spacing(style.line_spacing_extra, style.line_spacing_multiplier);
        view.set_padding_x(style.padding_x);
        view
    }

    /// Replaces the content, as a user edit or host update would.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.replace_surface_text(text.into());
    }

    /// Change notification from the surface. Ignored while the view is
    /// writing its own display text back.
    pub fn on_content_changed(&mut self, new_text: &str) {
        if self.programmatic_change {
            return;
        }
        self.full_text = new_text.to_string();
        self.stale = true;
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn display_text(&self) -> &str {
        self.surface.text()
    }

    pub fn is_ellipsized(&self) -> bool {
        self.ellipsized
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn max_lines(&self) -> MaxLines {
        self.max_lines
    }

    pub fn set_max_lines(&mut self, max_lines: impl Into<MaxLines>) {
        self.max_lines = max_lines.into();
        self.surface.set_max_lines(self.max_lines.limit());
        self.stale = true;
    }

    pub fn truncation_mode(&self) -> TruncationMode {
        self.mode
    }

    pub fn set_truncation_mode(&mut self, mode: TruncationMode) {
        self.mode = mode;
        self.stale = true;
    }

    pub fn substitution(&self) -> &str {
        &self.substitution
    }

    pub fn set_substitution(&mut self, substitution: impl Into<String>) {
        self.substitution = substitution.into();
        self.stale = true;
    }

    pub fn start_strategy(&self) -> StartStrategy {
        self.start_strategy
    }

    pub fn set_start_strategy(&mut self, start_strategy: StartStrategy) {
        self.start_strategy = start_strategy;
        self.stale = true;
    }

    pub fn line_spacing(&self) -> LineSpacing {
        self.surface.line_spacing()
    }

    pub fn set_line_spacing(&mut self, extra: f32, multiplier: f32) {
        self.surface
            .set_line_spacing(LineSpacing::new(extra, multiplier));
        self.stale = true;
    }

    pub fn padding_x(&self) -> usize {
        self.surface.padding_x()
    }

    pub fn set_padding_x(&mut self, padding_x: usize) {
        self.surface.set_padding_x(padding_x);
        self.stale = true;
    }

    /// Registers a listener. `None` stands in for a null listener and is
    /// rejected without touching the registered set.
    pub fn add_ellipsize_listener(
        &mut self,
        listener: Option<Rc<dyn EllipsizeListener>>,
    ) -> Result<ListenerId, EllipsizeError> {
        let listener = listener.ok_or(EllipsizeError::NullListener)?;
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        Ok(id)
    }

    pub fn remove_ellipsize_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Available width in cells. A change marks the view stale.
    pub fn set_width(&mut self, width: usize) {
        if self.width != Some(width) {
            self.width = Some(width);
            self.stale = true;
        }
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Recomputes the display text if any input changed since the last pass.
    /// Stays stale until a width is known.
    pub fn on_before_render(&mut self) {
        if !self.stale {
            return;
        }
        let Some(width) = self.width else {
            return;
        };

        let surface = &self.surface;
        let truncation = compute_display_text_with(
            &self.full_text,
            self.max_lines,
            self.mode,
            &self.substitution,
            self.start_strategy,
            |text| surface.measure(text, width),
        );

        if truncation.text != self.surface.text() {
            self.programmatic_change = true;
            self.replace_surface_text(truncation.text);
            self.programmatic_change = false;
        }
        self.stale = false;

        if truncation.ellipsized != self.ellipsized {
            self.ellipsized = truncation.ellipsized;
            self.notify_listeners();
        }
    }

    fn replace_surface_text(&mut self, text: String) {
        self.surface.set_text(text.clone());
        self.on_content_changed(&text);
    }

    fn notify_listeners(&self) {
        trace!(
            ellipsized = self.ellipsized,
            listeners = self.listeners.len(),
            "ellipsize state changed"
        );
        for (_, listener) in &self.listeners {
            listener.ellipsize_state_changed(self.ellipsized);
        }
    }
}

impl Component for EllipsizingText {
    fn render(&mut self, width: usize) -> Vec<String> {
        self.set_width(width);
        self.on_before_render();
        self.surface.render(width)
    }

    fn invalidate(&mut self) {
        self.stale = true;
    }
}
