//! Percentage coordinates from area spans.

use easy_layout_core::{Axis, Coordinates, Layout, LayoutError, Rectangle, Spacing};

use crate::options::{AbsoluteFallback, LayoutOptions};
use crate::spans::extract_spans;
use crate::validate::validate_rectangles;

/// Percentage metrics of one axis: padding, gap and the size of one track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMetrics {
    pub padding: f64,
    pub gap: f64,
    pub portion: f64,
}

impl AxisMetrics {
    /// Split 100% between `tracks` equal tracks after subtracting two
    /// paddings and `tracks - 1` gaps.
    ///
    /// Nothing is clamped; oversized spacing gives a negative portion.
    pub fn new(padding: f64, gap: f64, tracks: usize) -> Self {
        let tracks = tracks as f64;
        let total_gutter = padding * 2.0 + gap * (tracks - 1.0);
        let remaining = 100.0 - total_gutter;

        Self {
            padding,
            gap,
            portion: remaining / tracks,
        }
    }

    /// Offset of the 1-based track `start` from the container edge.
    pub fn offset(&self, start: usize) -> f64 {
        let before = start as f64 - 1.0;
        self.gap * before + before * self.portion + self.padding
    }

    /// Size of `covered` adjacent tracks, including the gaps between them.
    pub fn extent(&self, covered: usize) -> f64 {
        let covered = covered as f64;
        covered * self.portion + (covered - 1.0) * self.gap
    }
}

/// A spacing value on one axis, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Normalized {
    /// Explicit percentage, or absolute converted through the container size
    Percent(f64),
    /// Absolute value with nothing to convert it against
    Unconverted(f64),
}

fn normalize(spacing: Spacing, dimension: Option<f64>, axis: Axis) -> Normalized {
    match spacing {
        Spacing::Percent(p) => Normalized::Percent(p),
        Spacing::Absolute(v) => match dimension {
            Some(d) if d.is_finite() && d > 0.0 => Normalized::Percent(v / d * 100.0),
            Some(d) => {
                tracing::warn!(%axis, dimension = d, "ignoring unusable container dimension");
                Normalized::Unconverted(v)
            }
            None => Normalized::Unconverted(v),
        },
    }
}

fn resolve(
    spacing: Spacing,
    dimension: Option<f64>,
    axis: Axis,
    fallback: AbsoluteFallback,
) -> Result<f64, LayoutError> {
    match normalize(spacing, dimension, axis) {
        Normalized::Percent(p) => Ok(p),
        Normalized::Unconverted(v) if v == 0.0 => Ok(0.0),
        Normalized::Unconverted(v) => match fallback {
            AbsoluteFallback::AsPercent => {
                tracing::debug!(%axis, value = v, "absolute spacing used as a percentage");
                Ok(v)
            }
            AbsoluteFallback::Reject => Err(LayoutError::MissingContainerDimension { axis, spacing }),
        },
    }
}

fn axis_metrics(
    options: &LayoutOptions,
    axis: Axis,
    tracks: usize,
) -> Result<AxisMetrics, LayoutError> {
    let dimension = match axis {
        Axis::Horizontal => options.container_width,
        Axis::Vertical => options.container_height,
    };
    let fallback = options.absolute_fallback;

    let padding = resolve(options.padding, dimension, axis, fallback)?;
    let gap = resolve(options.gap, dimension, axis, fallback)?;

    Ok(AxisMetrics::new(padding, gap, tracks))
}

fn place(layout: &Layout, horizontal: AxisMetrics, vertical: AxisMetrics) -> Coordinates {
    if layout.is_empty() {
        return Coordinates::new();
    }

    layout
        .spans
        .iter()
        .map(|(name, span)| {
            let rect = Rectangle::new(
                vertical.offset(span.start_row),
                horizontal.offset(span.start_col),
                horizontal.extent(span.covered_cols()),
                vertical.extent(span.covered_rows()),
            );
            (name.clone(), rect)
        })
        .collect()
}

/// Convert the spans of an already extracted layout into rectangles.
///
/// An empty layout (no rows or no columns) yields no rectangles.
pub fn convert_layout(layout: &Layout, options: &LayoutOptions) -> Result<Coordinates, LayoutError> {
    let horizontal = axis_metrics(options, Axis::Horizontal, layout.column_count)?;
    let vertical = axis_metrics(options, Axis::Vertical, layout.row_count)?;

    Ok(place(layout, horizontal, vertical))
}

/// Compute one rectangle per area of `grid` under the given options.
///
/// With `strict` set the grid is validated first, see [`validate_rectangles`].
#[tracing::instrument(skip(grid), fields(rows = grid.len()))]
pub fn compute_with_options<R, S>(
    grid: &[R],
    options: &LayoutOptions,
) -> Result<Coordinates, LayoutError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let layout = extract_spans(grid);

    if options.strict {
        validate_rectangles(grid, &layout)?;
    }

    convert_layout(&layout, options)
}

/// Compute one rectangle per area of `grid`.
///
/// Absolute `padding` and `gap` are converted against the container width
/// (horizontally) and height (vertically) when those are given; otherwise
/// the raw number is used as a percentage. Never fails: an empty grid
/// yields an empty map.
pub fn compute_coordinates<R, S>(
    grid: &[R],
    padding: impl Into<Spacing>,
    gap: impl Into<Spacing>,
    container_width: Option<f64>,
    container_height: Option<f64>,
) -> Coordinates
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let options = LayoutOptions {
        padding: padding.into(),
        gap: gap.into(),
        container_width,
        container_height,
        ..LayoutOptions::default()
    };

    // AsPercent without strict never errors.
    compute_with_options(grid, &options).unwrap_or_default()
}
