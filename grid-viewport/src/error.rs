use thiserror::Error;

/// Rejected grid geometry or scroll input.
///
/// Returned by the validating constructors ([`crate::GridGeometry::new`],
/// [`crate::ColumnMetrics::new`]) and by the window composers. The low-level range helpers never
/// return it; they clamp instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("row height must be greater than zero")]
    ZeroRowHeight,
    #[error("column {index} has zero width")]
    ZeroColumnWidth { index: usize },
}
