//! Visible and overscan windows for virtualized two-dimensional grids.
//!
//! For adapter-level utilities (tracking the last scroll offset, `is_scrolling` debouncing), see
//! the `grid-viewport-adapter` crate.
//!
//! Given a scroll position, viewport dimensions and per-column widths, this crate derives which
//! rows and columns are inside the viewport and which ones should be rendered ahead of time in
//! the direction of travel ("overscan").
//!
//! All operations are pure: each call produces a fresh [`ViewportWindow`] from the supplied
//! inputs. The UI layer is expected to provide:
//! - row height, viewport height and row count
//! - ordered column widths (via [`ColumnSource`])
//! - the previous and the current scroll offsets
//! - an on-demand width measurement when the declared column width is not known yet
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod columns;
mod direction;
mod error;
mod geometry;
mod options;
mod overscan;
mod rows;
mod types;
mod viewport;


pub use columns::{
    ColumnSource, resolve_rendered_column_count, visible_column_range, visible_column_start,
};
pub use direction::scroll_direction;
pub use error::ValidationError;
pub use geometry::{Column, ColumnMetrics, GridGeometry};
pub use options::{OverscanConfig, ViewportOptions};
pub use rows::{compute_visible_row_range, initial_row_window};
pub use types::{ScrollDirection, ScrollOffset, ViewportWindow, VisibleRange};
pub use viewport::{GridViewport, ScrollUpdate, compute_initial_window, compute_next_scroll_state};
