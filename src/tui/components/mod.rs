mod component;
mod ellipsizing_text;
mod text;

pub use component::Component;
pub use ellipsizing_text::{EllipsizeListener, EllipsizingText, ListenerId};
pub use text::Text;
