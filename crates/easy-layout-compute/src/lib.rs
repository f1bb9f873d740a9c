//! Layout computation for easy-layout grids.
//!
//! Turns a grid of area names into one percentage rectangle per area.
//!
//! # Architecture
//!
//! 1. **Span extraction**: finds the first and last cell of every area name
//! 2. **Coordinate conversion**: normalizes padding and gap to percentages,
//!    splits what remains of each axis into equal tracks and places each span
//!
//! Both stages are pure functions; nothing is cached between calls.
//!
//! # Example
//!
//! ```ignore
//! use easy_layout_compute::{compute_coordinates, Spacing};
//!
//! let grid = [["a", "a", "b"], ["c", "c", "b"]];
//! let coords = compute_coordinates(&grid, 2.0, 2.0, None, None);
//!
//! for (name, rect) in &coords {
//!     println!("{}: top {} left {} width {} height {}", name, rect.top, rect.left, rect.width, rect.height);
//! }
//! ```

mod coords;
mod options;
mod spans;
mod validate;

pub use coords::{compute_coordinates, compute_with_options, convert_layout, AxisMetrics};
pub use options::{AbsoluteFallback, LayoutOptions};
pub use spans::extract_spans;
pub use validate::validate_rectangles;

pub use easy_layout_core::{
    AreaSpan, Axis, Coordinates, Grid, Layout, LayoutError, Percent, Position, Rectangle, Spacing,
};
