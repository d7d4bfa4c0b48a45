use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EllipsizeError {
    #[error("ellipsize listener must not be null")]
    NullListener,
    #[error("max lines must be at least 1")]
    ZeroMaxLines,
    #[error("line {line} is out of range for a layout of {line_count} lines")]
    LineOutOfRange { line: usize, line_count: usize },
    #[error("substring {start}..{end} is out of range for text of {len} characters")]
    SliceOutOfRange { start: usize, end: usize, len: usize },
}
