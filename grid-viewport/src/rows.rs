use crate::VisibleRange;

/// Computes the half-open range of rows inside the viewport.
///
/// - `start = round(scroll_top / row_height)` (nearest row, halves round up), clamped to
///   `total_rows`
/// - `end = min(start + ceil(viewport_height / row_height), total_rows)`
///
/// A zero `row_height` yields an empty range at `0`.
pub fn compute_visible_row_range(
    viewport_height: u32,
    row_height: u32,
    scroll_top: u64,
    total_rows: usize,
) -> VisibleRange {
    if row_height == 0 {
        vwarn!(viewport_height, scroll_top, "compute_visible_row_range: zero row height");
        return VisibleRange::default();
    }
    let row_height = u64::from(row_height);
    let rows_per_screen = u64::from(viewport_height).div_ceil(row_height);
    let start = round_div(scroll_top, row_height);

    let start = to_index(start).min(total_rows);
    let end = start
        .saturating_add(to_index(rows_per_screen))
        .min(total_rows);
    VisibleRange::new(start, end)
}

/// Number of rows in the window used before the first scroll.
///
/// `min(ceil((viewport_height - row_height) / row_height) * multiplier, total_rows)`, where a
/// viewport shorter than one row counts as zero rows.
pub fn initial_row_window(
    viewport_height: u32,
    row_height: u32,
    total_rows: usize,
    multiplier: usize,
) -> usize {
    if row_height == 0 {
        vwarn!(viewport_height, "initial_row_window: zero row height");
        return 0;
    }
    let rendered = viewport_height.saturating_sub(row_height).div_ceil(row_height);
    to_index(u64::from(rendered))
        .saturating_mul(multiplier)
        .min(total_rows)
}

// round(n / d) with halves rounding up, without going through floating point.
fn round_div(n: u64, d: u64) -> u64 {
    let q = n / d;
    let r = n % d;
    if r >= d - r { q.saturating_add(1) } else { q }
}

fn to_index(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}
