//! Error types for the easy-layout engine.

use crate::types::{Axis, Spacing};
use thiserror::Error;

/// Top-level error type for the easy-layout engine.
#[derive(Debug, Error)]
pub enum EasyLayoutError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors while reading a template or a spacing value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("layout is empty")]
    EmptyTemplate,

    #[error("rows must contain area names (line {line})")]
    EmptyRow { line: usize },

    #[error("unterminated quoted row at line {line}")]
    UnterminatedRow { line: usize },

    #[error("unexpected text {text:?} at line {line}")]
    TrailingText { line: usize, text: String },

    #[error("invalid spacing value: {value:?}")]
    InvalidSpacing { value: String },
}

/// Errors during coordinate computation.
///
/// The compatibility entry point never produces these; they only surface
/// when a stricter policy is requested through the layout options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("{axis} spacing {spacing} is absolute but no {axis} container dimension was given")]
    MissingContainerDimension { axis: Axis, spacing: Spacing },

    #[error(
        "area {name:?} is not a filled rectangle: cell (row {row}, column {col}) holds {}",
        .found.as_deref().unwrap_or("nothing")
    )]
    NonRectangularArea {
        name: String,
        row: usize,
        col: usize,
        found: Option<String>,
    },
}
