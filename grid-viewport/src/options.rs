/// Number of rows and columns rendered past the visible range on the leading edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverscanConfig {
    pub rows: usize,
    pub columns: usize,
}

impl OverscanConfig {
    pub const DEFAULT_ROWS: usize = 8;
    pub const DEFAULT_COLUMNS: usize = 8;

    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// No overscan at all: the render range always equals the visible range.
    pub fn none() -> Self {
        Self::new(0, 0)
    }
}

impl Default for OverscanConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLUMNS)
    }
}

/// Configuration for [`crate::GridViewport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewportOptions {
    pub overscan: OverscanConfig,

    /// How many screenfuls of rows the window covers before the first scroll.
    ///
    /// The initial window renders `rows_per_screen * initial_row_window_multiplier` rows
    /// (capped at the row count), so the first scroll does not start from a bare viewport.
    pub initial_row_window_multiplier: usize,
}

impl ViewportOptions {
    pub const DEFAULT_INITIAL_ROW_WINDOW_MULTIPLIER: usize = 4;

    pub fn new() -> Self {
        Self {
            overscan: OverscanConfig::default(),
            initial_row_window_multiplier: Self::DEFAULT_INITIAL_ROW_WINDOW_MULTIPLIER,
        }
    }

    pub fn with_overscan(mut self, overscan: OverscanConfig) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_overscan_rows(mut self, rows: usize) -> Self {
        self.overscan.rows = rows;
        self
    }

    pub fn with_overscan_columns(mut self, columns: usize) -> Self {
        self.overscan.columns = columns;
        self
    }

    pub fn with_initial_row_window_multiplier(mut self, multiplier: usize) -> Self {
        self.initial_row_window_multiplier = multiplier;
        self
    }
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self::new()
    }
}
