pub mod components;
pub mod layout;
pub mod utils;

pub use components::{Component, EllipsizeListener, EllipsizingText, ListenerId, Text};
pub use layout::{measure_line_layout, LineLayout, LineSpacing, TextLayout};
pub use utils::{char_len, char_slice, truncate_to_cells, visible_width};
