use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ellipsize::{MaxLines, StartStrategy, TruncationMode, DEFAULT_SUBSTITUTION};

pub const ENV_STYLE_PATH: &str = "ELLIPSIZE_STYLE";

/// Construction-time styling of an ellipsizing view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EllipsizeStyle {
    pub substitution: String,
    pub max_lines: MaxLines,
    pub ellipsize: TruncationMode,
    pub start_strategy: StartStrategy,
    pub line_spacing_extra: f32,
    pub line_spacing_multiplier: f32,
    pub padding_x: usize,
}

impl Default for EllipsizeStyle {
    fn default() -> Self {
        Self {
            substitution: DEFAULT_SUBSTITUTION.to_string(),
            max_lines: MaxLines::Unbounded,
            ellipsize: TruncationMode::None,
            start_strategy: StartStrategy::default(),
            line_spacing_extra: 0.0,
            line_spacing_multiplier: 1.0,
            padding_x: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to read style file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid style JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn style_from_json_str(json: &str) -> Result<EllipsizeStyle, StyleError> {
    Ok(serde_json::from_str(json)?)
}

pub fn style_from_json_file(path: &Path) -> Result<EllipsizeStyle, StyleError> {
    let content = fs::read_to_string(path).map_err(|source| StyleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    style_from_json_str(&content)
}

/// Style from `path`, else from the file named by `ELLIPSIZE_STYLE`, else
/// the defaults.
pub fn load_style(path: Option<&Path>) -> Result<EllipsizeStyle, StyleError> {
    if let Some(path) = path {
        return style_from_json_file(path);
    }
    match env::var(ENV_STYLE_PATH) {
        Ok(path) if !path.trim().is_empty() => style_from_json_file(Path::new(path.trim())),
        _ => Ok(EllipsizeStyle::default()),
    }
}
