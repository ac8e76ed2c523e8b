use crate::{
    GridGeometry, ScrollOffset, ValidationError, ViewportOptions, ViewportWindow,
    compute_visible_row_range, initial_row_window, scroll_direction, visible_column_range,
};

/// Per-event inputs for [`GridViewport::next_scroll_state`].
///
/// `ScrollUpdate::new` takes the row height and row count from the geometry, and the canvas
/// height (viewport minus fixed header/footer, floored at 0) as the viewport height, so the
/// echoed `height` means the same thing as in the initial window. Override them when the
/// rendering layer reports different values for this event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub scroll_top: u64,
    pub scroll_left: u64,
    pub viewport_height: u32,
    pub row_height: u32,
    pub total_rows: usize,
    /// Pixel budget for the column walk. `None` (or `Some(0)`) uses the declared total width.
    pub width: Option<u32>,
}

impl ScrollUpdate {
    pub fn new(geometry: &GridGeometry, scroll_top: u64, scroll_left: u64) -> Self {
        Self {
            scroll_top,
            scroll_left,
            viewport_height: geometry
                .viewport_height()
                .saturating_sub(geometry.row_offset_height()),
            row_height: geometry.row_height(),
            total_rows: geometry.total_rows(),
            width: None,
        }
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_total_rows(mut self, total_rows: usize) -> Self {
        self.total_rows = total_rows;
        self
    }

    pub fn with_width(mut self, width: Option<u32>) -> Self {
        self.width = width;
        self
    }

    pub fn offset(&self) -> ScrollOffset {
        ScrollOffset::new(self.scroll_top, self.scroll_left)
    }
}

/// Derives [`ViewportWindow`]s from grid geometry and scroll offsets.
///
/// This type holds configuration only. It does not remember previous offsets: the caller passes
/// the last offset in on every call (see `grid-viewport-adapter` for a type that tracks it).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridViewport {
    options: ViewportOptions,
}

impl GridViewport {
    pub fn new(options: ViewportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ViewportOptions) {
        self.options = options;
    }

    /// Computes the window to use before any scrolling happened.
    ///
    /// Rows cover several screenfuls (see [`ViewportOptions::initial_row_window_multiplier`]),
    /// columns cover the whole strip, and visible and overscan ranges are identical.
    pub fn initial_window(
        &self,
        geometry: &GridGeometry,
    ) -> Result<ViewportWindow, ValidationError> {
        if geometry.row_height() == 0 {
            return Err(ValidationError::ZeroRowHeight);
        }
        let rows = initial_row_window(
            geometry.viewport_height(),
            geometry.row_height(),
            geometry.total_rows(),
            self.options.initial_row_window_multiplier,
        );
        let columns = geometry.total_columns();
        vdebug!(
            rows,
            columns,
            total_rows = geometry.total_rows(),
            "GridViewport::initial_window"
        );

        Ok(ViewportWindow {
            height: geometry.canvas_height(),
            scroll_top: 0,
            scroll_left: 0,
            row_visible_start_idx: 0,
            row_visible_end_idx: rows,
            row_overscan_start_idx: 0,
            row_overscan_end_idx: rows,
            col_visible_start_idx: 0,
            col_visible_end_idx: columns,
            col_overscan_start_idx: 0,
            col_overscan_end_idx: columns,
            ..ViewportWindow::default()
        })
    }

    /// Computes the window after a scroll (or resize) event.
    ///
    /// `last` is the offset of the previous event and only feeds the direction detection.
    /// `measure_width` is called at most once, and only when the column width budget resolves
    /// to exactly zero.
    pub fn next_scroll_state(
        &self,
        geometry: &GridGeometry,
        last: ScrollOffset,
        update: ScrollUpdate,
        measure_width: impl FnOnce() -> u32,
    ) -> Result<ViewportWindow, ValidationError> {
        if update.row_height == 0 {
            return Err(ValidationError::ZeroRowHeight);
        }
        let overscan = self.options.overscan;

        let direction = scroll_direction(last, update.offset());

        let rows = compute_visible_row_range(
            update.viewport_height,
            update.row_height,
            update.scroll_top,
            update.total_rows,
        );
        let row_render = overscan.expand_rows(direction, rows, update.total_rows);

        let columns = geometry.columns();
        let total_columns = geometry.total_columns();
        // An empty strip resolves to [0, 0): the start walk is skipped and the end falls back to
        // the column count.
        let cols = visible_column_range(columns, update.scroll_left, update.width, measure_width);
        let col_render = overscan.expand_columns(direction, cols, total_columns);

        vtrace!(
            scroll_top = update.scroll_top,
            scroll_left = update.scroll_left,
            ?direction,
            rows_start = rows.start_index,
            rows_end = rows.end_index,
            cols_start = cols.start_index,
            cols_end = cols.end_index,
            "GridViewport::next_scroll_state"
        );

        Ok(ViewportWindow {
            height: i64::from(update.viewport_height),
            scroll_top: update.scroll_top,
            scroll_left: update.scroll_left,
            row_visible_start_idx: rows.start_index,
            row_visible_end_idx: rows.end_index,
            row_overscan_start_idx: row_render.start_index,
            row_overscan_end_idx: row_render.end_index,
            col_visible_start_idx: cols.start_index,
            col_visible_end_idx: cols.end_index,
            col_overscan_start_idx: col_render.start_index,
            col_overscan_end_idx: col_render.end_index,
            scroll_direction: direction,
            is_scrolling: true,
        })
    }
}

/// [`GridViewport::initial_window`] with default options.
pub fn compute_initial_window(geometry: &GridGeometry) -> Result<ViewportWindow, ValidationError> {
    GridViewport::default().initial_window(geometry)
}

/// [`GridViewport::next_scroll_state`] with default options.
pub fn compute_next_scroll_state(
    geometry: &GridGeometry,
    last: ScrollOffset,
    update: ScrollUpdate,
    measure_width: impl FnOnce() -> u32,
) -> Result<ViewportWindow, ValidationError> {
    GridViewport::default().next_scroll_state(geometry, last, update, measure_width)
}
