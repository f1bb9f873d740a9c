//! Line splitting and row tokenizing for grid templates.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0, space1},
    multi::separated_list0,
    sequence::delimited,
    IResult,
};

/// Parse one area name.
pub fn area_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '"')(input)
}

/// Parse a whitespace-separated run of area names.
pub fn area_names(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(space0, separated_list0(space1, area_name), space0)(input)
}

/// Parse a row wrapped in double quotes, as in `grid-template-areas`.
pub fn quoted_row(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(char('"'), area_names, char('"'))(input)
}

/// A line of input with its 1-based line number.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    pub content: &'a str,
    pub line_number: usize,
}

impl Line<'_> {
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }
}

/// Split input into trimmed lines, dropping `//` comment lines.
pub fn split_lines(input: &str) -> Vec<Line<'_>> {
    input
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.starts_with("//") {
                None
            } else {
                Some(Line {
                    content: trimmed,
                    line_number: i + 1,
                })
            }
        })
        .collect()
}
