use alloc::vec::Vec;

use crate::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub width: u32,
}

impl Column {
    pub fn new(width: u32) -> Self {
        Self { width }
    }
}

/// Ordered column widths plus the declared total width of the column strip.
///
/// The total is the sum of the widths unless overridden with [`Self::with_total_width`]. A total
/// of `0` means "not measured yet": the column walk then asks the caller for a measured width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnMetrics {
    columns: Vec<Column>,
    total_width: u64,
}

impl ColumnMetrics {
    /// Creates metrics from ordered columns. Every column must have a positive width.
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Result<Self, ValidationError> {
        let columns: Vec<Column> = columns.into_iter().collect();
        if let Some(index) = columns.iter().position(|c| c.width == 0) {
            return Err(ValidationError::ZeroColumnWidth { index });
        }
        let total_width = columns
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(u64::from(c.width)));
        Ok(Self {
            columns,
            total_width,
        })
    }

    pub fn from_widths(widths: impl IntoIterator<Item = u32>) -> Result<Self, ValidationError> {
        Self::new(widths.into_iter().map(Column::new))
    }

    pub fn with_total_width(mut self, total_width: u64) -> Self {
        self.total_width = total_width;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Column> {
        self.columns.get(index).copied()
    }

    /// The declared total width (see the type-level docs for the meaning of `0`).
    pub fn total_width(&self) -> u64 {
        self.total_width
    }

    /// Recomputes the declared total from the column widths.
    pub fn recompute_total_width(&mut self) {
        self.total_width = self
            .columns
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(u64::from(c.width)));
    }
}

/// Static layout inputs of a virtualized grid.
///
/// Constructed through [`GridGeometry::new`], which rejects a zero row height. Column widths are
/// validated by [`ColumnMetrics::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    row_height: u32,
    viewport_height: u32,
    total_rows: usize,
    columns: ColumnMetrics,
    row_offset_height: u32,
}

impl GridGeometry {
    pub fn new(
        row_height: u32,
        viewport_height: u32,
        total_rows: usize,
        columns: ColumnMetrics,
    ) -> Result<Self, ValidationError> {
        if row_height == 0 {
            return Err(ValidationError::ZeroRowHeight);
        }
        Ok(Self {
            row_height,
            viewport_height,
            total_rows,
            columns,
            row_offset_height: 0,
        })
    }

    /// Sets the height taken by fixed headers/footers inside the viewport.
    pub fn with_row_offset_height(mut self, row_offset_height: u32) -> Self {
        self.row_offset_height = row_offset_height;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_total_rows(mut self, total_rows: usize) -> Self {
        self.total_rows = total_rows;
        self
    }

    /// Overrides the declared total column width (`0` = not measured yet).
    pub fn with_total_width(mut self, total_width: u64) -> Self {
        self.columns = self.columns.with_total_width(total_width);
        self
    }

    pub fn with_columns(mut self, columns: ColumnMetrics) -> Self {
        self.columns = columns;
        self
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn total_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn total_width(&self) -> u64 {
        self.columns.total_width()
    }

    pub fn row_offset_height(&self) -> u32 {
        self.row_offset_height
    }

    pub fn columns(&self) -> &ColumnMetrics {
        &self.columns
    }

    /// `viewport_height - row_offset_height`, not clamped.
    pub fn canvas_height(&self) -> i64 {
        i64::from(self.viewport_height) - i64::from(self.row_offset_height)
    }
}
