//! Grammar for grid templates.

use easy_layout_core::{Grid, ParseError};

use crate::lexer::{area_names, quoted_row, split_lines, Line};

/// Parse template source into a token grid.
///
/// Blank lines before the first row and after the last row are ignored; a
/// blank line between rows is an error.
pub fn parse(source: &str) -> Result<Grid, ParseError> {
    let lines = split_lines(source);

    let Some(first) = lines.iter().position(|l| !l.is_blank()) else {
        return Err(ParseError::EmptyTemplate);
    };
    let last = lines.iter().rposition(|l| !l.is_blank()).unwrap_or(first);

    lines[first..=last].iter().map(parse_row).collect()
}

fn parse_row(line: &Line<'_>) -> Result<Vec<String>, ParseError> {
    let line_number = line.line_number;
    if line.is_blank() {
        return Err(ParseError::EmptyRow { line: line_number });
    }

    let parsed = if line.content.starts_with('"') {
        quoted_row(line.content).map_err(|_| ParseError::UnterminatedRow { line: line_number })?
    } else {
        area_names(line.content).map_err(|_| ParseError::TrailingText {
            line: line_number,
            text: line.content.to_string(),
        })?
    };

    let (rest, names) = parsed;
    let rest = rest.trim();
    if !rest.is_empty() {
        return Err(ParseError::TrailingText {
            line: line_number,
            text: rest.to_string(),
        });
    }
    if names.is_empty() {
        return Err(ParseError::EmptyRow { line: line_number });
    }

    Ok(names.into_iter().map(str::to_string).collect())
}
