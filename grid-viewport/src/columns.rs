use alloc::vec::Vec;
use core::ops::ControlFlow;

use crate::{Column, ColumnMetrics, VisibleRange};

/// An ordered sequence of columns that can be looked up by index.
///
/// Looking up an index past the last column returns `None`; the column walks treat that as the
/// end of the strip.
pub trait ColumnSource {
    fn column_count(&self) -> usize;

    fn column_width(&self, index: usize) -> Option<u32>;

    /// The declared width of the whole strip. `0` means "not measured yet".
    fn total_width(&self) -> u64 {
        (0..self.column_count())
            .filter_map(|i| self.column_width(i))
            .fold(0u64, |acc, w| acc.saturating_add(u64::from(w)))
    }
}

impl ColumnSource for [Column] {
    fn column_count(&self) -> usize {
        self.len()
    }

    fn column_width(&self, index: usize) -> Option<u32> {
        self.get(index).map(|c| c.width)
    }
}

impl ColumnSource for Vec<Column> {
    fn column_count(&self) -> usize {
        self.len()
    }

    fn column_width(&self, index: usize) -> Option<u32> {
        self.get(index).map(|c| c.width)
    }
}

impl ColumnSource for ColumnMetrics {
    fn column_count(&self) -> usize {
        self.len()
    }

    fn column_width(&self, index: usize) -> Option<u32> {
        self.get(index).map(|c| c.width)
    }

    fn total_width(&self) -> u64 {
        ColumnMetrics::total_width(self)
    }
}

/// Finds the column straddling `scroll_left`: the first index whose right edge lies past the
/// offset.
///
/// Returns `0` for an empty strip. When `scroll_left` is at or beyond the end of the strip the
/// walk runs out of columns and the result clamps to the last column.
///
/// The clamp is intentional: a scroll past the strip keeps the last column in the window
/// (`[count - 1, count)`) rather than collapsing to the empty range `[count, count)`.
pub fn visible_column_start<C: ColumnSource + ?Sized>(columns: &C, scroll_left: u64) -> usize {
    let count = columns.column_count();
    if count == 0 {
        return 0;
    }
    // (index, consumed width) fold; breaks on the straddling column or on "no column".
    let walk = (0..count).try_fold(0u64, |consumed, index| {
        let Some(width) = columns.column_width(index) else {
            return ControlFlow::Break(None);
        };
        let consumed = consumed.saturating_add(u64::from(width));
        if consumed > scroll_left {
            ControlFlow::Break(Some(index))
        } else {
            ControlFlow::Continue(consumed)
        }
    });
    match walk {
        ControlFlow::Break(Some(index)) => index,
        ControlFlow::Break(None) | ControlFlow::Continue(_) => {
            vwarn!(scroll_left, count, "visible_column_start: offset past the last column");
            count - 1
        }
    }
}

/// Counts the columns rendered from `start_index` within the available pixel budget.
///
/// The budget is `width` when it is positive, otherwise the source's declared total width. If
/// that is exactly `0`, `measure_width` is called once to obtain it. Every column that begins
/// before the budget is used up is counted, including a partially visible trailing one.
pub fn resolve_rendered_column_count<C: ColumnSource + ?Sized>(
    columns: &C,
    start_index: usize,
    width: Option<u32>,
    measure_width: impl FnOnce() -> u32,
) -> usize {
    let mut remaining = match width {
        Some(w) if w > 0 => u64::from(w),
        _ => columns.total_width(),
    };
    if remaining == 0 {
        remaining = u64::from(measure_width());
        vtrace!(measured = remaining, "resolve_rendered_column_count: measured width");
        if remaining == 0 {
            vwarn!("resolve_rendered_column_count: measured width is zero");
        }
    }

    let mut count = 0usize;
    let mut index = start_index;
    while remaining > 0 {
        let Some(w) = columns.column_width(index) else {
            break;
        };
        count += 1;
        index += 1;
        remaining = remaining.saturating_sub(u64::from(w));
    }
    count
}

/// Computes the visible column range for `scroll_left`.
///
/// When no column fits (a zero budget, or a start past the strip) the end falls back to the
/// column count, so the range runs to the end of the strip instead of being empty.
pub fn visible_column_range<C: ColumnSource + ?Sized>(
    columns: &C,
    scroll_left: u64,
    width: Option<u32>,
    measure_width: impl FnOnce() -> u32,
) -> VisibleRange {
    let total = columns.column_count();
    let start = visible_column_start(columns, scroll_left);
    let count = resolve_rendered_column_count(columns, start, width, measure_width);
    let end = if count != 0 { start + count } else { total };
    VisibleRange::new(start, end)
}
