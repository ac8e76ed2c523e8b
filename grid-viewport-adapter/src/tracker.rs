use grid_viewport::{
    GridGeometry, GridViewport, ScrollDirection, ScrollOffset, ScrollUpdate, ValidationError,
    ViewportOptions, ViewportWindow,
};

/// A framework-neutral tracker that owns grid geometry, the last scroll offset and the latest
/// [`ViewportWindow`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` when the UI reports a new scroll position
/// - `on_resize` / `set_geometry` when the viewport or the data changes
/// - `tick(now_ms)` on a timer to clear `is_scrolling` once scrolling has settled
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    viewport: GridViewport,
    geometry: GridGeometry,
    last: ScrollOffset,
    width: Option<u32>,
    window: ViewportWindow,
    last_scroll_event_ms: Option<u64>,
    is_scrolling_reset_delay_ms: u64,
}

impl ScrollTracker {
    pub const DEFAULT_IS_SCROLLING_RESET_DELAY_MS: u64 = 150;

    pub fn new(geometry: GridGeometry) -> Result<Self, ValidationError> {
        Self::with_options(geometry, ViewportOptions::default())
    }

    pub fn with_options(
        geometry: GridGeometry,
        options: ViewportOptions,
    ) -> Result<Self, ValidationError> {
        let viewport = GridViewport::new(options);
        let window = viewport.initial_window(&geometry)?;
        adebug!(
            total_rows = geometry.total_rows(),
            total_columns = geometry.total_columns(),
            "ScrollTracker::new"
        );
        Ok(Self {
            viewport,
            geometry,
            last: ScrollOffset::default(),
            width: None,
            window,
            last_scroll_event_ms: None,
            is_scrolling_reset_delay_ms: Self::DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
        })
    }

    /// Debounced duration after the last scroll event before `is_scrolling` is cleared.
    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn options(&self) -> &ViewportOptions {
        self.viewport.options()
    }

    pub fn window(&self) -> &ViewportWindow {
        &self.window
    }

    pub fn last_offset(&self) -> ScrollOffset {
        self.last
    }

    pub fn is_scrolling(&self) -> bool {
        self.window.is_scrolling
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.window.scroll_direction
    }

    /// Call this when the UI reports a scroll position change (e.g. wheel/drag).
    ///
    /// `measure_width` is only called when neither a width budget (see [`Self::on_resize`]) nor a
    /// declared total column width is available.
    pub fn on_scroll(
        &mut self,
        scroll_top: u64,
        scroll_left: u64,
        now_ms: u64,
        measure_width: impl FnOnce() -> u32,
    ) -> Result<&ViewportWindow, ValidationError> {
        atrace!(scroll_top, scroll_left, now_ms, "ScrollTracker::on_scroll");
        let update =
            ScrollUpdate::new(&self.geometry, scroll_top, scroll_left).with_width(self.width);
        self.window = self
            .viewport
            .next_scroll_state(&self.geometry, self.last, update, measure_width)?;
        self.last = update.offset();
        self.last_scroll_event_ms = Some(now_ms);
        Ok(&self.window)
    }

    /// Call this when the viewport changes size.
    ///
    /// The window is recomputed at the current offset, so no overscan is applied.
    pub fn on_resize(
        &mut self,
        viewport_height: u32,
        width: Option<u32>,
        measure_width: impl FnOnce() -> u32,
    ) -> Result<&ViewportWindow, ValidationError> {
        atrace!(viewport_height, ?width, "ScrollTracker::on_resize");
        self.geometry = self.geometry.clone().with_viewport_height(viewport_height);
        self.width = width;
        self.recompute(measure_width)
    }

    /// Replaces the geometry (e.g. rows were added or columns changed) and recomputes the window
    /// at the current offset.
    pub fn set_geometry(
        &mut self,
        geometry: GridGeometry,
        measure_width: impl FnOnce() -> u32,
    ) -> Result<&ViewportWindow, ValidationError> {
        adebug!(
            total_rows = geometry.total_rows(),
            total_columns = geometry.total_columns(),
            "ScrollTracker::set_geometry"
        );
        self.geometry = geometry;
        self.recompute(measure_width)
    }

    /// Clears `is_scrolling` once `is_scrolling_reset_delay_ms` has passed since the last scroll
    /// event.
    ///
    /// Returns `true` if the window changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.window.is_scrolling {
            return false;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) < self.is_scrolling_reset_delay_ms {
            return false;
        }
        self.window.is_scrolling = false;
        self.last_scroll_event_ms = None;
        true
    }

    fn recompute(
        &mut self,
        measure_width: impl FnOnce() -> u32,
    ) -> Result<&ViewportWindow, ValidationError> {
        let is_scrolling = self.window.is_scrolling;
        let update = ScrollUpdate::new(&self.geometry, self.last.scroll_top, self.last.scroll_left)
            .with_width(self.width);
        let mut window =
            self.viewport
                .next_scroll_state(&self.geometry, self.last, update, measure_width)?;
        // Resizes are not scroll events.
        window.is_scrolling = is_scrolling;
        self.window = window;
        Ok(&self.window)
    }
}
