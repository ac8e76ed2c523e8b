// Example: drive a ScrollTracker from simulated UI events.
use grid_viewport::{ColumnMetrics, GridGeometry};
use grid_viewport_adapter::ScrollTracker;

fn main() -> Result<(), grid_viewport::ValidationError> {
    let columns = ColumnMetrics::from_widths(std::iter::repeat_n(120, 64))?;
    let geometry = GridGeometry::new(28, 560, 50_000, columns)?;
    let mut tracker = ScrollTracker::new(geometry)?.with_is_scrolling_reset_delay_ms(150);

    // The UI measures its width once the first frame is laid out.
    tracker.on_resize(560, Some(960), || 960)?;

    let mut now_ms = 0u64;
    for step in 1..=5u64 {
        now_ms += 16;
        let w = tracker.on_scroll(step * 140, step * 30, now_ms, || 960)?;
        println!(
            "t={now_ms}ms {:?} rows={:?} cols={:?} cells={}",
            w.scroll_direction,
            w.overscan_rows(),
            w.overscan_columns(),
            w.rendered_cell_count(),
        );
    }

    now_ms += 200;
    if tracker.tick(now_ms) {
        println!("t={now_ms}ms scrolling settled: {:?}", tracker.window().visible_rows());
    }
    Ok(())
}
