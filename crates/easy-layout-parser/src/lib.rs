//! Parser for easy-layout grid templates.
//!
//! A template is a block of text with one grid row per line and area names
//! separated by whitespace. Built on `nom`.

mod grammar;
mod lexer;

pub use grammar::parse;

use easy_layout_core::{Grid, ParseError};

/// Parse a grid template into a token grid.
///
/// # Example
///
/// ```ignore
/// use easy_layout_parser::parse_template;
///
/// let grid = parse_template("
///     header header
///     nav    main
/// ")?;
/// assert_eq!(grid[1], vec!["nav", "main"]);
/// ```
pub fn parse_template(source: &str) -> Result<Grid, ParseError> {
    parse(source)
}
