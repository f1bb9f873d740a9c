//! Core value types for the easy-layout engine.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::errors::ParseError;

/// A grid of area-name tokens, one inner vector per row.
///
/// Rows may have different lengths.
pub type Grid = Vec<Vec<String>>;

/// Percentage rectangles keyed by area name, in first-occurrence order.
pub type Coordinates = IndexMap<String, Rectangle>;

/// Inclusive row/column range occupied by one area.
///
/// All indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AreaSpan {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl AreaSpan {
    /// A span covering the single cell at `(row, col)`.
    pub fn cell(row: usize, col: usize) -> Self {
        Self {
            start_row: row,
            start_col: col,
            end_row: row,
            end_col: col,
        }
    }

    /// Number of rows covered by this span.
    pub fn covered_rows(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    /// Number of columns covered by this span.
    pub fn covered_cols(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    /// Whether the 1-based cell `(row, col)` lies inside this span.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.start_row..=self.end_row).contains(&row)
            && (self.start_col..=self.end_col).contains(&col)
    }
}

/// Spans for every area of a grid, plus the grid dimensions.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Layout {
    /// Number of rows in the grid
    pub row_count: usize,
    /// Length of the longest row
    pub column_count: usize,
    /// Area spans in first-occurrence order
    pub spans: IndexMap<String, AreaSpan>,
}

impl Layout {
    /// True when the grid has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.column_count == 0
    }

    pub fn get(&self, name: &str) -> Option<&AreaSpan> {
        self.spans.get(name)
    }

    pub fn area_names(&self) -> impl Iterator<Item = &str> {
        self.spans.keys().map(String::as_str)
    }
}

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Columns; normalized against the container width
    Horizontal,
    /// Rows; normalized against the container height
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// A padding or gap value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing {
    /// A number in container units (pixels, usually)
    Absolute(f64),
    /// An explicit percentage of the container
    Percent(f64),
}

impl Spacing {
    pub fn absolute(value: f64) -> Self {
        Self::Absolute(value)
    }

    pub fn percent(value: f64) -> Self {
        Self::Percent(value)
    }

    /// The raw number, without its unit.
    pub fn value(&self) -> f64 {
        match self {
            Spacing::Absolute(v) | Spacing::Percent(v) => *v,
        }
    }

    pub fn is_percent(&self) -> bool {
        matches!(self, Spacing::Percent(_))
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::Absolute(0.0)
    }
}

impl From<f64> for Spacing {
    fn from(value: f64) -> Self {
        Self::Absolute(value)
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::Absolute(v) => write!(f, "{}", v),
            Spacing::Percent(v) => write!(f, "{}%", v),
        }
    }
}

impl FromStr for Spacing {
    type Err = ParseError;

    /// Parse `"10"` as absolute and `"5%"` as a percentage.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidSpacing {
            value: s.to_string(),
        };

        let trimmed = s.trim();
        let (number, is_percent) = match trimmed.strip_suffix('%') {
            Some(rest) => (rest.trim_end(), true),
            None => (trimmed, false),
        };

        // f64::from_str also accepts "inf", "NaN" and exponents; only plain decimals are spacing.
        let is_decimal = !number.is_empty()
            && number
                .trim_start_matches(['-', '+'])
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.');
        if !is_decimal {
            return Err(invalid());
        }

        let value: f64 = number.parse().map_err(|_| invalid())?;
        Ok(if is_percent {
            Spacing::Percent(value)
        } else {
            Spacing::Absolute(value)
        })
    }
}

/// A percentage, printed as `<number>%`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(pub f64);

impl Percent {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_infinite() {
            f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })?;
        } else if v == 0.0 {
            // Also catches -0.0, which would otherwise print as "-0".
            f.write_str("0")?;
        } else if v.abs() < 1e-6 || v.abs() >= 1e21 {
            // Exponent form as JavaScript prints it: `1e+21`, `5e-7`.
            let text = format!("{:e}", v);
            match text.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, exp)?
                }
                _ => f.write_str(&text)?,
            }
        } else {
            write!(f, "{}", v)?;
        }
        f.write_str("%")
    }
}

impl FromStr for Percent {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s.trim().strip_suffix('%').ok_or_else(|| ParseError::InvalidSpacing {
            value: s.to_string(),
        })?;
        match number {
            "Infinity" => Ok(Percent(f64::INFINITY)),
            "-Infinity" => Ok(Percent(f64::NEG_INFINITY)),
            _ => number.parse().map(Percent).map_err(|_| ParseError::InvalidSpacing {
                value: s.to_string(),
            }),
        }
    }
}

/// CSS positioning scheme of an emitted rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    #[default]
    Absolute,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Absolute => "absolute",
        }
    }
}

/// An absolutely positioned box, every edge in percent of the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub position: Position,
    pub top: Percent,
    pub left: Percent,
    pub width: Percent,
    pub height: Percent,
}

impl Rectangle {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            position: Position::Absolute,
            top: Percent(top),
            left: Percent(left),
            width: Percent(width),
            height: Percent(height),
        }
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left.0 + self.width.0
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f64 {
        self.top.0 + self.height.0
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Percent, Spacing};
    use serde::de::{self, Deserializer, Visitor};
    use serde::{Deserialize, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Percent {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Percent {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        }
    }

    /// Absolute spacing serializes as a number, percentages as `"<n>%"`.
    impl Serialize for Spacing {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Spacing::Absolute(v) => serializer.serialize_f64(*v),
                Spacing::Percent(_) => serializer.collect_str(self),
            }
        }
    }

    struct SpacingVisitor;

    impl<'de> Visitor<'de> for SpacingVisitor {
        type Value = Spacing;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a percentage string such as \"5%\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Spacing, E> {
            Ok(Spacing::Absolute(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Spacing, E> {
            Ok(Spacing::Absolute(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Spacing, E> {
            Ok(Spacing::Absolute(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Spacing, E> {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Spacing {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(SpacingVisitor)
        }
    }
}
