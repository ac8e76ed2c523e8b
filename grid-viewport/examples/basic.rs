// Example: initial window, then a few scroll events.
use grid_viewport::{
    ColumnMetrics, GridGeometry, ScrollOffset, ScrollUpdate, ValidationError,
    compute_initial_window, compute_next_scroll_state,
};

fn main() -> Result<(), ValidationError> {
    let columns = ColumnMetrics::from_widths((0..200).map(|i| 80 + (i % 5) * 20))?;
    let geometry = GridGeometry::new(24, 480, 1_000_000, columns)?.with_row_offset_height(32);

    let initial = compute_initial_window(&geometry)?;
    println!("initial rows={:?} cols={:?}", initial.visible_rows(), initial.visible_columns());

    let mut last = initial.scroll_offset();
    for (top, left) in [(2_400, 0), (2_400, 900), (1_200, 900)] {
        let update = ScrollUpdate::new(&geometry, top, left).with_width(Some(1_024));
        let w = compute_next_scroll_state(&geometry, last, update, || 1_024)?;
        println!(
            "{:?}: visible rows={:?} cols={:?}, render rows={:?} cols={:?}",
            w.scroll_direction,
            w.visible_rows(),
            w.visible_columns(),
            w.overscan_rows(),
            w.overscan_columns(),
        );
        last = ScrollOffset::new(top, left);
    }
    Ok(())
}
