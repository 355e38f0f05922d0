use tracing::{debug, trace};

use crate::api::ChartConfig;
use crate::core::{
    AxisRange, BoundedSeries, IdentityParser, SampleItem, SampleParser, ScrollPosition, Viewport,
    active_pixel_range, active_range_for_index, project_series,
};
use crate::error::ChartResult;
use crate::interaction::{PositionUpdate, ScrollEngine, ScrollPhase};
use crate::render::{PixelRange, RenderFrame, Renderer};

/// Orchestrates series data, gesture input, scroll physics and projection
/// into render frames for the backend.
///
/// Single-threaded and frame-driven: hosts forward gesture callbacks in
/// arrival order and call [`advance`](Self::advance) at roughly frame rate
/// while a trajectory is active. Data ingestion goes through this controller
/// so appends never race a render pass.
pub struct ChartController<T: SampleItem + 'static, R: Renderer> {
    renderer: R,
    config: ChartConfig,
    series: BoundedSeries<T>,
    parser: Box<dyn SampleParser<T>>,
    engine: ScrollEngine,
    active_range: AxisRange,
    last_center_index: i64,
    needs_redraw: bool,
}

impl<T: SampleItem + 'static, R: Renderer> core::fmt::Debug for ChartController<T, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChartController")
            .field("config", &self.config)
            .field("active_range", &self.active_range)
            .field("last_center_index", &self.last_center_index)
            .field("needs_redraw", &self.needs_redraw)
            .finish_non_exhaustive()
    }
}

impl<T: SampleItem + 'static, R: Renderer> ChartController<T, R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let mut engine = ScrollEngine::new(config.pixel_per_unit, config.physics);
        engine.set_extent(0, f64::from(config.viewport.width));

        Ok(Self {
            renderer,
            config,
            series: BoundedSeries::new(),
            parser: Box::new(IdentityParser),
            engine,
            active_range: active_range_for_index(0, config.active_period),
            last_center_index: 0,
            needs_redraw: true,
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    #[must_use]
    pub fn series(&self) -> &BoundedSeries<T> {
        &self.series
    }

    #[must_use]
    pub fn position(&self) -> ScrollPosition {
        self.engine.position()
    }

    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        self.engine.phase()
    }

    #[must_use]
    pub fn active_range(&self) -> AxisRange {
        self.active_range
    }

    /// True when state changed since the last completed render pass.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Replaces the series. Takes effect at the next render; scroll position
    /// is left untouched.
    pub fn set_series(&mut self, series: BoundedSeries<T>) {
        debug!(count = series.len(), "set series");
        self.series = series;
        self.sync_extent();
        self.needs_redraw = true;
    }

    /// Appends one sample, keeping running bounds and scroll extent current.
    pub fn append(&mut self, item: T) {
        self.series.append(item);
        self.sync_extent();
        self.needs_redraw = true;
    }

    pub fn append_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.series.append_all(items);
        self.sync_extent();
        self.needs_redraw = true;
    }

    /// Swaps the axis-value extraction strategy.
    pub fn set_parser(&mut self, parser: Box<dyn SampleParser<T>>) {
        self.parser = parser;
        self.needs_redraw = true;
    }

    /// Resizes the viewport without moving the scroll position.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let updated = ChartConfig { viewport, ..self.config }.validate()?;
        self.config = updated;
        self.sync_extent();
        self.needs_redraw = true;
        Ok(())
    }

    /// Requests an animated scroll centering `index`. No-op when already
    /// resting exactly there.
    pub fn scroll_to_index(&mut self, index: i64) {
        if self.engine.scroll_to_index(index) {
            self.needs_redraw = true;
        }
    }

    /// Pointer down: always consumed, a drag is now in progress.
    pub fn on_gesture_down(&mut self, x: f64) -> bool {
        self.engine.begin_drag(x);
        true
    }

    /// Pointer move: consumed once a drag is in progress. A move without a
    /// preceding down degrades to an implicit drag start at that position.
    pub fn on_gesture_move(&mut self, x: f64) -> bool {
        let applied = self.engine.drag_move(x);
        if applied != 0.0 {
            self.sync_active_range();
            self.needs_redraw = true;
        }
        true
    }

    /// Pointer release with the tracker's current x velocity.
    pub fn on_gesture_up(&mut self, velocity_x: f64) -> bool {
        let consumed = self.engine.phase() == ScrollPhase::Dragging;
        self.engine.end_drag(velocity_x);
        if consumed {
            self.needs_redraw = true;
        }
        consumed
    }

    /// Gesture cancellation: aborts a drag in place, position keeps its last
    /// computed value.
    pub fn on_gesture_cancel(&mut self) -> bool {
        let consumed = self.engine.phase() == ScrollPhase::Dragging;
        self.engine.cancel();
        consumed
    }

    /// Advances an active trajectory by `delta_time` time-units.
    ///
    /// Returns None when nothing animates. The active range is resynced when
    /// the center index crossed an index boundary during the step.
    pub fn advance(&mut self, delta_time: f64) -> Option<PositionUpdate> {
        let update = self.engine.advance(delta_time)?;
        self.sync_active_range();
        self.needs_redraw = true;
        Some(update)
    }

    /// Builds and submits one frame, then clears the redraw flag.
    ///
    /// An empty series produces an empty polyline, never an error.
    pub fn render(&mut self) -> ChartResult<RenderFrame> {
        let viewport = self.config.viewport;
        let position = self.engine.position();
        let pixel_per_unit = self.config.pixel_per_unit;

        let mut frame = RenderFrame::new(viewport);
        frame.polyline = project_series(
            &self.series,
            self.parser.as_ref(),
            position,
            pixel_per_unit,
            viewport,
        )
        .collect();

        let (active_start_px, active_end_px) =
            active_pixel_range(self.active_range, position, pixel_per_unit, viewport);
        if active_start_px > 0.0 {
            frame.fade_left = Some(PixelRange::new(
                active_start_px - pixel_per_unit,
                active_start_px,
            ));
        }
        if active_end_px < f64::from(viewport.width) {
            frame.fade_right = Some(PixelRange::new(active_end_px, active_end_px + pixel_per_unit));
        }

        self.renderer.render(&frame)?;
        self.needs_redraw = false;
        trace!(
            points = frame.polyline.len(),
            center_index = position.center_index(),
            "frame rendered"
        );
        Ok(frame)
    }

    fn sync_extent(&mut self) {
        self.engine
            .set_extent(self.series.len(), f64::from(self.config.viewport.width));
    }

    /// Recomputes the highlighted period only when the integral center index
    /// changed; sub-index motion leaves it alone.
    fn sync_active_range(&mut self) {
        let center_index = self.engine.position().center_index();
        if center_index != self.last_center_index {
            self.last_center_index = center_index;
            self.active_range = active_range_for_index(center_index, self.config.active_period);
            trace!(
                center_index,
                start = self.active_range.start,
                end = self.active_range.end,
                "active range recomputed"
            );
        }
    }
}
