use core::ops::Range;

/// The direction of the most recent scroll movement.
///
/// Vertical movement wins over horizontal movement; see [`crate::scroll_direction`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Neither offset changed.
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    pub scroll_top: u64,
    pub scroll_left: u64,
}

impl ScrollOffset {
    pub fn new(scroll_top: u64, scroll_left: u64) -> Self {
        Self {
            scroll_top,
            scroll_left,
        }
    }
}

/// A half-open index range `[start_index, end_index)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    /// Returns `true` if `other` lies entirely within this range.
    pub fn covers(&self, other: &Self) -> bool {
        self.start_index <= other.start_index && other.end_index <= self.end_index
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }
}

impl From<VisibleRange> for Range<usize> {
    fn from(r: VisibleRange) -> Self {
        r.as_range()
    }
}

/// A snapshot of which rows and columns are visible and which ones should be rendered.
///
/// A window is never updated in place: every scroll or resize notification produces a new one.
/// All ranges are half-open and satisfy
/// `0 <= overscan_start <= visible_start <= visible_end <= overscan_end <= total`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportWindow {
    /// Height of the row canvas. Negative when the fixed header/footer height exceeds the
    /// viewport.
    pub height: i64,
    pub scroll_top: u64,
    pub scroll_left: u64,

    pub row_visible_start_idx: usize,
    pub row_visible_end_idx: usize,
    pub row_overscan_start_idx: usize,
    pub row_overscan_end_idx: usize,

    pub col_visible_start_idx: usize,
    pub col_visible_end_idx: usize,
    pub col_overscan_start_idx: usize,
    pub col_overscan_end_idx: usize,

    pub scroll_direction: ScrollDirection,
    pub is_scrolling: bool,
}

impl ViewportWindow {
    pub fn visible_rows(&self) -> VisibleRange {
        VisibleRange::new(self.row_visible_start_idx, self.row_visible_end_idx)
    }

    pub fn overscan_rows(&self) -> VisibleRange {
        VisibleRange::new(self.row_overscan_start_idx, self.row_overscan_end_idx)
    }

    pub fn visible_columns(&self) -> VisibleRange {
        VisibleRange::new(self.col_visible_start_idx, self.col_visible_end_idx)
    }

    pub fn overscan_columns(&self) -> VisibleRange {
        VisibleRange::new(self.col_overscan_start_idx, self.col_overscan_end_idx)
    }

    pub fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset::new(self.scroll_top, self.scroll_left)
    }

    /// Number of cells the rendering layer has to produce for this window.
    pub fn rendered_cell_count(&self) -> usize {
        self.overscan_rows()
            .len()
            .saturating_mul(self.overscan_columns().len())
    }

    /// Walks the overscan rectangle row-major, calling `f(row, column)` for each cell.
    pub fn for_each_rendered_cell(&self, mut f: impl FnMut(usize, usize)) {
        for row in self.overscan_rows().as_range() {
            for col in self.overscan_columns().as_range() {
                f(row, col);
            }
        }
    }
}
