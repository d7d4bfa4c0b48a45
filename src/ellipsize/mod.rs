mod engine;
mod error;
mod mode;

pub use engine::{
    compute_display_text, compute_display_text_with, Truncation, DEFAULT_SUBSTITUTION,
};
pub use error::EllipsizeError;
pub use mode::{MaxLines, StartStrategy, TruncationMode};
