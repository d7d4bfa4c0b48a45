pub mod cli;
pub mod config;
pub mod ellipsize;
pub mod tui;

pub use cli::args::*;
pub use config::{EllipsizeStyle, StyleError};
pub use ellipsize::*;
