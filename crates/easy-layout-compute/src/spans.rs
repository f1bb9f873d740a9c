//! Area span extraction.

use easy_layout_core::{AreaSpan, Layout};
use indexmap::IndexMap;

/// Derive the span of every area name in `grid`.
///
/// Cells are scanned in row-major order. The first cell holding a name
/// starts its span; every later cell holding the same name becomes the new
/// end. No max is taken, so for a name that does not fill a single
/// rectangle the span is only a bounding guess.
///
/// Row and column indices in the result are 1-based. The column count is
/// the length of the longest row.
pub fn extract_spans<R, S>(grid: &[R]) -> Layout
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut spans: IndexMap<String, AreaSpan> = IndexMap::new();
    let mut column_count = 0;

    for (i, row) in grid.iter().enumerate() {
        let row = row.as_ref();
        column_count = column_count.max(row.len());

        for (j, token) in row.iter().enumerate() {
            let pos_x = j + 1;
            let pos_y = i + 1;

            match spans.get_mut(token.as_ref()) {
                Some(span) => {
                    span.end_col = pos_x;
                    span.end_row = pos_y;
                }
                None => {
                    spans.insert(token.as_ref().to_string(), AreaSpan::cell(pos_y, pos_x));
                }
            }
        }
    }

    // A later occurrence can sit left of the first one; keep start <= end.
    for span in spans.values_mut() {
        if span.end_col < span.start_col {
            std::mem::swap(&mut span.start_col, &mut span.end_col);
        }
    }

    let layout = Layout {
        row_count: grid.len(),
        column_count,
        spans,
    };

    tracing::debug!(
        rows = layout.row_count,
        columns = layout.column_count,
        areas = layout.spans.len(),
        "extracted area spans"
    );

    layout
}
