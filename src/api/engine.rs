use std::time::{Duration, Instant};

use tracing::debug;

use crate::api::{ChartEngineConfig, Theme};
use crate::core::{Chart, DerivedScales, Viewport, Window};
use crate::data::ChartData;
use crate::error::ChartResult;
use crate::interaction::{
    DragMode, HANDLE_WIDTH, RectPx, SelectorLayout, ViewportController, ViewportEvent,
};
use crate::render::{
    ChartRenderer, ContentLayout, LinePrimitive, RectPrimitive, RenderFrame, Renderer,
    build_preview_polylines,
};

const HANDLE_CORNER_RADIUS: f64 = 2.0;
const ARROW_STROKE_WIDTH: f64 = 2.0;
const TRACK_INSET: f64 = 3.0;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` couples the dataset, the drag-driven viewport controller,
/// the caching scene builder and a rendering backend. All processing is
/// synchronous on the caller's thread; the only deferred element is the
/// debounced vertical redraw, driven by [`ChartEngine::pump`].
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    chart: Chart,
    controller: ViewportController,
    scene: ChartRenderer,
    theme: Theme,
    selector_height: f64,
    host_events: Vec<ViewportEvent>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds the engine from a decoded dataset and emits `Initialized`.
    ///
    /// Dataset validation failures are terminal: no partial engine is
    /// constructed.
    pub fn new(renderer: R, config: ChartEngineConfig, data: ChartData) -> ChartResult<Self> {
        let config = config.validate()?;
        let mut chart = data.into_chart()?;
        let theme = Theme::default();

        let mut controller = ViewportController::new(
            config.viewport.width_px(),
            f64::from(config.selector_height),
        )?;
        let scene = ChartRenderer::new(
            config.viewport,
            &chart,
            theme,
            Duration::from_millis(config.redraw_delay_ms),
        )?;

        controller.attach(&mut chart);
        debug!(
            points = chart.point_count(),
            series = chart.series().len(),
            "chart attached"
        );

        let mut engine = Self {
            renderer,
            chart,
            controller,
            scene,
            theme,
            selector_height: f64::from(config.selector_height),
            host_events: Vec::new(),
        };
        engine.process_events(Instant::now());
        Ok(engine)
    }

    /// Starts a drag gesture. Returns `false` when no selector region was
    /// hit; the gesture is rejected and the controller stays idle.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.controller.pointer_down(x, y)
    }

    /// Applies a horizontal pointer delta while dragging.
    ///
    /// `now` drives the debounce deadline of any vertical redraw this move
    /// schedules. Returns `true` when the window changed.
    pub fn pointer_move(&mut self, x: f64, now: Instant) -> bool {
        let changed = self.controller.pointer_move(&mut self.chart, x);
        if changed {
            self.process_events(now);
        }
        changed
    }

    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    pub fn pointer_cancel(&mut self) {
        self.controller.pointer_cancel();
    }

    /// Toggles one series and forces derived-field recomputation for the
    /// current window. Returns `false` when the id is unknown.
    pub fn set_series_visible(&mut self, id: &str, visible: bool) -> bool {
        if !self.chart.set_series_visible(id, visible) {
            return false;
        }
        self.controller.apply_visibility_change(&mut self.chart);
        // Visibility changes rebuild inline, so the clock is irrelevant here.
        self.process_events(Instant::now());
        true
    }

    /// Fires the debounced vertical redraw once its delay has elapsed.
    pub fn pump(&mut self, now: Instant) -> bool {
        self.scene.pump(now)
    }

    /// Rasterizes the current chart band through the backend.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.scene.compose();
        self.renderer.render(&frame)
    }

    /// Rasterizes the range-selector control through the backend.
    pub fn render_selector(&mut self) -> ChartResult<()> {
        let frame = self.selector_frame();
        self.renderer.render(&frame)
    }

    /// Events published since the last drain, in order.
    #[must_use]
    pub fn drain_events(&mut self) -> Vec<ViewportEvent> {
        std::mem::take(&mut self.host_events)
    }

    #[must_use]
    pub fn window(&self) -> Window {
        self.controller.window()
    }

    #[must_use]
    pub fn scales(&self) -> DerivedScales {
        self.chart.scales()
    }

    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.controller.drag_mode()
    }

    #[must_use]
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.scene.viewport()
    }

    #[must_use]
    pub fn content_layout(&self) -> ContentLayout {
        self.scene.layout()
    }

    #[must_use]
    pub fn selector_layout(&self) -> SelectorLayout {
        self.controller.selector_layout()
    }

    #[must_use]
    pub fn has_pending_vertical_redraw(&self) -> bool {
        self.scene.has_pending_vertical_redraw()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Explicit theme setter; rebuilds every cached layer synchronously.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.scene.set_theme(&self.chart, theme);
    }

    /// Current chart-band scene without rendering it.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        self.scene.compose()
    }

    /// Builds the selector scene: track, preview polylines, dimmed bands,
    /// handles with arrows, and window borders.
    #[must_use]
    pub fn selector_frame(&self) -> RenderFrame {
        let viewport = Viewport::new(
            self.scene.viewport().width,
            self.selector_height.max(1.0) as u32,
        );
        let mut frame = RenderFrame::new(viewport);
        let layout = self.controller.selector_layout();
        let width = viewport.width_px();
        let height = viewport.height_px();
        let track_height = height - TRACK_INSET * 2.0;

        frame.push_rect(RectPrimitive::new(
            0.0,
            TRACK_INSET,
            width,
            track_height,
            self.theme.background,
        ));

        let mut preview = RenderFrame::new(viewport);
        for line in build_preview_polylines(
            &self.chart,
            width - HANDLE_WIDTH * 2.0,
            track_height,
        ) {
            preview.push_line(line);
        }
        frame.append_offset(&preview, HANDLE_WIDTH, TRACK_INSET);

        for dim in [layout.left_dim, layout.right_dim] {
            frame.push_rect(RectPrimitive::new(
                dim.x,
                dim.y,
                dim.width,
                dim.height,
                self.theme.dim,
            ));
        }

        for handle in [layout.left_handle, layout.right_handle] {
            frame.push_rect(
                RectPrimitive::new(
                    handle.x,
                    handle.y,
                    handle.width,
                    handle.height,
                    self.theme.control,
                )
                .with_corner_radius(HANDLE_CORNER_RADIUS),
            );
        }
        for border in [layout.top_border, layout.bottom_border] {
            frame.push_rect(RectPrimitive::new(
                border.x,
                border.y,
                border.width,
                border.height,
                self.theme.control,
            ));
        }

        self.push_handle_arrow(&mut frame, layout.left_handle, true);
        self.push_handle_arrow(&mut frame, layout.right_handle, false);

        frame
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn process_events(&mut self, now: Instant) {
        for event in self.controller.drain_events() {
            self.scene.handle_event(&self.chart, event, now);
            self.host_events.push(event);
        }
    }

    /// Chevron glyph centered on a handle, pointing outwards.
    fn push_handle_arrow(&self, frame: &mut RenderFrame, handle: RectPx, left: bool) {
        let center_x = handle.x + handle.width / 2.0;
        let center_y = handle.y + handle.height / 2.0;
        let tip = if left { -3.0 } else { 3.0 };

        frame.push_line(LinePrimitive::new(
            center_x - tip,
            center_y - 7.0,
            center_x + tip,
            center_y,
            ARROW_STROKE_WIDTH,
            self.theme.control_arrow,
        ));
        frame.push_line(LinePrimitive::new(
            center_x + tip,
            center_y,
            center_x - tip,
            center_y + 7.0,
            ARROW_STROKE_WIDTH,
            self.theme.control_arrow,
        ));
    }
}
