use crate::{OverscanConfig, ScrollDirection, VisibleRange};

// Padding is only added on the edge the content is scrolling towards.
impl OverscanConfig {
    pub fn row_start(&self, direction: ScrollDirection, visible_start: usize) -> usize {
        if direction == ScrollDirection::Up {
            visible_start.saturating_sub(self.rows)
        } else {
            visible_start
        }
    }

    pub fn row_end(
        &self,
        direction: ScrollDirection,
        visible_end: usize,
        total_rows: usize,
    ) -> usize {
        if direction == ScrollDirection::Down {
            visible_end.saturating_add(self.rows).min(total_rows)
        } else {
            visible_end
        }
    }

    pub fn column_start(&self, direction: ScrollDirection, visible_start: usize) -> usize {
        if direction == ScrollDirection::Left {
            visible_start.saturating_sub(self.columns)
        } else {
            visible_start
        }
    }

    pub fn column_end(
        &self,
        direction: ScrollDirection,
        visible_end: usize,
        total_columns: usize,
    ) -> usize {
        if direction == ScrollDirection::Right {
            visible_end.saturating_add(self.columns).min(total_columns)
        } else {
            visible_end
        }
    }

    /// Expands a visible row range into the row render range.
    pub fn expand_rows(
        &self,
        direction: ScrollDirection,
        visible: VisibleRange,
        total_rows: usize,
    ) -> VisibleRange {
        VisibleRange::new(
            self.row_start(direction, visible.start_index),
            self.row_end(direction, visible.end_index, total_rows),
        )
    }

    /// Expands a visible column range into the column render range.
    pub fn expand_columns(
        &self,
        direction: ScrollDirection,
        visible: VisibleRange,
        total_columns: usize,
    ) -> VisibleRange {
        VisibleRange::new(
            self.column_start(direction, visible.start_index),
            self.column_end(direction, visible.end_index, total_columns),
        )
    }
}
