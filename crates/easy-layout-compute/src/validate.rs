//! Optional rectangularity check for extracted spans.

use easy_layout_core::{AreaSpan, Layout, LayoutError};

/// A disagreeing cell: 1-based row and column, and what it holds.
type Mismatch = (usize, usize, Option<String>);

/// Check that every area in `layout` fills exactly its span.
///
/// Areas are checked in span order. For each one the reported cell is the
/// first, in row-major order, that either lies inside the span without
/// holding the area's name or lies outside it while holding the name.
/// `found` is `None` past the end of a short row.
///
/// Each cell is visited a bounded number of times, so the cost stays linear
/// in the cell count however many areas there are.
pub fn validate_rectangles<R, S>(grid: &[R], layout: &Layout) -> Result<(), LayoutError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let strays = first_strays(grid, layout);

    for ((name, span), stray) in layout.spans.iter().zip(strays) {
        let hole = first_hole(grid, name, span);

        let mismatch = match (hole, stray) {
            (Some(hole), Some((row, col))) if (row, col) < (hole.0, hole.1) => {
                Some((row, col, Some(name.clone())))
            }
            (Some(hole), _) => Some(hole),
            (None, Some((row, col))) => Some((row, col, Some(name.clone()))),
            (None, None) => None,
        };

        if let Some((row, col, found)) = mismatch {
            return Err(LayoutError::NonRectangularArea {
                name: name.clone(),
                row,
                col,
                found,
            });
        }
    }

    Ok(())
}

/// First cell inside `span` that does not hold `name`.
///
/// Scanning stops at the first miss, and every cell passed over holds
/// `name`, so across all areas each cell is passed over at most once.
fn first_hole<R, S>(grid: &[R], name: &str, span: &AreaSpan) -> Option<Mismatch>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    for row in span.start_row..=span.end_row {
        let cells: &[S] = grid.get(row - 1).map(AsRef::as_ref).unwrap_or(&[]);

        for col in span.start_col..=span.end_col {
            let found = cells.get(col - 1).map(AsRef::as_ref);
            if found != Some(name) {
                return Some((row, col, found.map(str::to_string)));
            }
        }
    }

    None
}

/// For every area, in span order, the first cell outside its span that
/// holds its name.
fn first_strays<R, S>(grid: &[R], layout: &Layout) -> Vec<Option<(usize, usize)>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut strays = vec![None; layout.spans.len()];

    for (i, row) in grid.iter().enumerate() {
        for (j, token) in row.as_ref().iter().enumerate() {
            let Some((index, _, span)) = layout.spans.get_full(token.as_ref()) else {
                continue;
            };
            if strays[index].is_none() && !span.contains(i + 1, j + 1) {
                strays[index] = Some((i + 1, j + 1));
            }
        }
    }

    strays
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spans::extract_spans;

    fn check<const N: usize>(grid: &[[&str; N]]) -> Result<(), LayoutError> {
        validate_rectangles(grid, &extract_spans(grid))
    }

    #[test]
    fn test_filled_rectangles_pass() {
        assert!(check(&[["a", "a", "b"], ["c", "c", "b"]]).is_ok());
        assert!(check(&[["h", "h", "h"], ["n", "m", "m"], ["n", "m", "m"]]).is_ok());
    }

    #[test]
    fn test_l_shape_fails() {
        let err = check(&[["a", "a"], ["a", "b"]]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::NonRectangularArea {
                name: "a".into(),
                row: 1,
                col: 2,
                found: Some("a".into()),
            }
        );
    }

    #[test]
    fn test_occurrence_outside_span_fails() {
        // "a" fills column 1 but also appears at row 2, column 2.
        let err = check(&[["a", "b"], ["a", "a"], ["a", "b"]]).unwrap_err();
        match err {
            LayoutError::NonRectangularArea { name, row, col, found } => {
                assert_eq!(name, "a");
                assert_eq!((row, col), (2, 2));
                assert_eq!(found.as_deref(), Some("a"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_disjoint_duplicate_fails() {
        let err = check(&[["a", "b", "a"]]).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::NonRectangularArea { ref name, row: 1, col: 2, .. } if name == "a"
        ));
    }

    #[test]
    fn test_ragged_rows() {
        let grid: Vec<Vec<&str>> = vec![vec!["a", "b"], vec!["a"]];
        let layout = extract_spans(&grid);
        assert!(validate_rectangles(&grid, &layout).is_ok());

        let grid: Vec<Vec<&str>> = vec![vec!["a", "b"], vec!["c"]];
        let layout = extract_spans(&grid);
        assert!(validate_rectangles(&grid, &layout).is_ok());

        let grid: Vec<Vec<&str>> = vec![vec!["b", "b"], vec!["c"]];
        let layout = extract_spans(&grid);
        assert!(validate_rectangles(&grid, &layout).is_ok());

        let grid: Vec<Vec<&str>> = vec![vec!["c", "b", "b"], vec!["c", "b"], vec!["d", "b", "b"]];
        let layout = extract_spans(&grid);
        assert_eq!(
            validate_rectangles(&grid, &layout),
            Err(LayoutError::NonRectangularArea {
                name: "b".into(),
                row: 2,
                col: 3,
                found: None,
            })
        );
    }

    #[test]
    fn test_reports_earliest_cell_of_first_area() {
        // "a" spans column 2; its stray at (2, 1) comes before the hole at (2, 2).
        let err = check(&[["b", "a"], ["a", "c"], ["a", "a"]]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::NonRectangularArea {
                name: "a".into(),
                row: 2,
                col: 1,
                found: Some("a".into()),
            }
        );
    }

    #[test]
    fn test_many_single_cell_areas() {
        let side = 300;
        let mut grid: Vec<Vec<String>> = (0..side)
            .map(|r| (0..side).map(|c| format!("r{r}c{c}")).collect())
            .collect();
        assert!(validate_rectangles(&grid, &extract_spans(&grid)).is_ok());

        // Reuse the top-left name in the bottom-right corner.
        grid[side - 1][side - 1] = "r0c0".to_string();
        let err = validate_rectangles(&grid, &extract_spans(&grid)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::NonRectangularArea {
                name: "r0c0".into(),
                row: 1,
                col: 2,
                found: Some("r0c1".into()),
            }
        );
    }

    #[test]
    fn test_empty_grid_passes() {
        let grid: Vec<Vec<String>> = Vec::new();
        assert!(validate_rectangles(&grid, &extract_spans(&grid)).is_ok());
    }
}
