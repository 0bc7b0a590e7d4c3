//! Chart scene builder with bucket-gated geometry regeneration.
//!
//! Polyline geometry is expensive to rebuild, so it is cached per zoom
//! bucket: panning and fine zooming inside a bucket only adjust crop and
//! scale factors. Vertical (grid + rescale) work is debounced through the
//! redraw scheduler so it fires once input settles, never per drag delta.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::api::Theme;
use crate::core::{Chart, DerivedScales, LabelPlan, TARGET_LABEL_COUNT, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ViewportEvent;
use crate::render::{LinePrimitive, RenderFrame, TextPrimitive};
use crate::schedule::DebounceQueue;

/// Fixed number of horizontal grid lines.
pub const GRID_LINE_COUNT: usize = 5;

const CHART_STROKE_WIDTH: f64 = 2.0;
const PREVIEW_STROKE_WIDTH: f64 = 1.0;
const GRID_STROKE_WIDTH: f64 = 0.5;
const LABEL_FONT_SIZE: f64 = 12.0;
const GRID_LABEL_ASCENT: f64 = 16.0;
const X_LABEL_BASELINE_OFFSET: f64 = 15.0;

/// Crop/scale state applied to the cached geometry when compositing.
///
/// Panning inside a zoom bucket only mutates this layout; the cached
/// polylines stay untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentLayout {
    /// Current content width, `viewport_width * horizontal_scale`.
    pub content_width: f64,
    /// Horizontal crop offset, `content_width * lower`.
    pub scroll_offset_x: f64,
    /// Top of the vertically stretched band (can be negative).
    pub band_y: f64,
    /// Stretched band height, `viewport_height / vertical_scale`.
    pub band_height: f64,
}

/// Deferred vertical redraw request; the payload of the debounce queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalRedraw {
    pub current_max_y: f64,
    pub vertical_scale: f64,
}

/// Builds and caches the chart scene from series data, window state and
/// scale factors.
#[derive(Debug)]
pub struct ChartRenderer {
    viewport: Viewport,
    plan: LabelPlan,
    theme: Theme,
    scheduler: DebounceQueue<VerticalRedraw>,
    layout: ContentLayout,
    /// Content width the cached polylines were generated at.
    geometry_width: f64,
    /// Zoom bucket of the cached polylines.
    rendered_bucket: Option<f64>,
    last_current_max_y: Option<f64>,
    polylines: Vec<LinePrimitive>,
    x_labels: Vec<TextPrimitive>,
    grid_frame: RenderFrame,
}

impl ChartRenderer {
    pub fn new(
        viewport: Viewport,
        chart: &Chart,
        theme: Theme,
        redraw_delay: Duration,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            viewport,
            plan: LabelPlan::build(chart.x()),
            theme,
            scheduler: DebounceQueue::new(redraw_delay),
            layout: ContentLayout {
                content_width: viewport.width_px(),
                scroll_offset_x: 0.0,
                band_y: 0.0,
                band_height: viewport.height_px(),
            },
            geometry_width: viewport.width_px(),
            rendered_bucket: None,
            last_current_max_y: None,
            polylines: Vec::new(),
            x_labels: Vec::new(),
            grid_frame: RenderFrame::new(viewport),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn layout(&self) -> ContentLayout {
        self.layout
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn label_plan(&self) -> &LabelPlan {
        &self.plan
    }

    #[must_use]
    pub fn has_pending_vertical_redraw(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Zoom bucket the cached polylines were generated for.
    #[must_use]
    pub fn rendered_bucket(&self) -> Option<f64> {
        self.rendered_bucket
    }

    /// Applies a new theme and rebuilds every cached layer.
    pub fn set_theme(&mut self, chart: &Chart, theme: Theme) {
        self.theme = theme;
        let scales = chart.scales();
        self.regenerate_geometry(chart, scales);
        self.rebuild_grid(scales.current_max_y);
    }

    /// Reacts to one controller event.
    ///
    /// Attach and visibility changes rebuild everything inline. Window
    /// changes regenerate horizontal geometry only at bucket boundaries and
    /// route vertical work through the scheduler.
    pub fn handle_event(&mut self, chart: &Chart, event: ViewportEvent, now: Instant) {
        let scales = event.scales();
        let window = event.window();

        self.layout.content_width = self.viewport.width_px() * scales.horizontal_scale;
        self.layout.scroll_offset_x = self.layout.content_width * window.lower();

        match event {
            ViewportEvent::Initialized { .. } | ViewportEvent::VisibilityChanged { .. } => {
                // A pending drag-driven redraw is stale once the series set
                // or binding changed.
                self.scheduler.cancel();
                self.regenerate_geometry(chart, scales);
                self.rebuild_grid(scales.current_max_y);
                self.apply_vertical_stretch(scales.vertical_scale);
                self.rendered_bucket = Some(scales.rounded_scale);
                self.last_current_max_y = Some(scales.current_max_y);
            }
            ViewportEvent::WindowChanged { .. } => {
                let bucket_changed = self.rendered_bucket != Some(scales.rounded_scale);
                if bucket_changed && is_bucket_boundary(scales.rounded_scale) {
                    debug!(bucket = scales.rounded_scale, "zoom bucket crossed");
                    self.regenerate_geometry(chart, scales);
                    self.rendered_bucket = Some(scales.rounded_scale);
                }

                if self.last_current_max_y != Some(scales.current_max_y) {
                    self.scheduler.schedule(
                        now,
                        VerticalRedraw {
                            current_max_y: scales.current_max_y,
                            vertical_scale: scales.vertical_scale,
                        },
                    );
                }
                self.last_current_max_y = Some(scales.current_max_y);
            }
        }
    }

    /// Fires the debounced vertical redraw once its delay has elapsed.
    ///
    /// Returns `true` when grid and vertical stretch were rebuilt.
    pub fn pump(&mut self, now: Instant) -> bool {
        let Some(redraw) = self.scheduler.poll(now) else {
            return false;
        };

        self.rebuild_grid(redraw.current_max_y);
        self.apply_vertical_stretch(redraw.vertical_scale);
        true
    }

    /// Composites the final viewport-sized scene from the cached layers.
    ///
    /// Cached polylines and x labels are cropped, offset and stretched to
    /// the current layout; no geometry is regenerated here.
    #[must_use]
    pub fn compose(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        let width = self.viewport.width_px();

        for rect in &self.grid_frame.rects {
            frame.push_rect(*rect);
        }
        for line in &self.grid_frame.lines {
            frame.push_line(*line);
        }
        for text in &self.grid_frame.texts {
            frame.push_text(text.clone());
        }

        let sx = if self.geometry_width > 0.0 {
            self.layout.content_width / self.geometry_width
        } else {
            1.0
        };
        let sy = self.layout.band_height / self.viewport.height_px();

        for line in &self.polylines {
            let x1 = line.x1 * sx - self.layout.scroll_offset_x;
            let x2 = line.x2 * sx - self.layout.scroll_offset_x;
            if x1.max(x2) < 0.0 || x1.min(x2) > width {
                continue;
            }
            frame.push_line(LinePrimitive {
                x1,
                y1: line.y1 * sy + self.layout.band_y,
                x2,
                y2: line.y2 * sy + self.layout.band_y,
                ..*line
            });
        }

        for text in &self.x_labels {
            let x = text.x * sx - self.layout.scroll_offset_x;
            if x < -LABEL_FONT_SIZE * 4.0 || x > width {
                continue;
            }
            let mut text = text.clone();
            text.x = x;
            frame.push_text(text);
        }

        frame
    }

    /// Rebuilds polylines and x labels at the current bucket's content width.
    fn regenerate_geometry(&mut self, chart: &Chart, scales: DerivedScales) {
        self.geometry_width = self.viewport.width_px() * scales.horizontal_scale;
        self.polylines = build_polylines(
            chart,
            self.geometry_width,
            self.viewport.height_px(),
            CHART_STROKE_WIDTH,
        );

        self.x_labels.clear();
        let spacing = self.geometry_width / TARGET_LABEL_COUNT as f64;
        let baseline = self.viewport.height_px() - X_LABEL_BASELINE_OFFSET;
        for (index, label) in self
            .plan
            .subset_for_scale(scales.rounded_scale)
            .iter()
            .enumerate()
        {
            self.x_labels.push(TextPrimitive::new(
                label.text.clone(),
                spacing * index as f64,
                baseline,
                LABEL_FONT_SIZE,
                self.theme.label,
            ));
        }
    }

    /// Rebuilds the fixed-count grid with values strided `max / count`.
    fn rebuild_grid(&mut self, current_max_y: f64) {
        self.grid_frame = RenderFrame::new(self.viewport);
        let width = self.viewport.width_px();
        let height = self.viewport.height_px();
        let step_y = height / GRID_LINE_COUNT as f64;
        let step_value = current_max_y / GRID_LINE_COUNT as f64;

        for index in 0..GRID_LINE_COUNT {
            let y = height - index as f64 * step_y;
            self.grid_frame.push_line(LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                GRID_STROKE_WIDTH,
                self.theme.grid,
            ));

            if step_value > 0.0 {
                self.grid_frame.push_text(TextPrimitive::new(
                    format!("{}", (step_value * index as f64) as i64),
                    0.0,
                    y - GRID_LABEL_ASCENT,
                    LABEL_FONT_SIZE,
                    self.theme.label,
                ));
            }
        }
    }

    /// Stretches the band so the windowed maximum aligns with the top.
    fn apply_vertical_stretch(&mut self, vertical_scale: f64) {
        let height = self.viewport.height_px();
        self.layout.band_height = if vertical_scale > 0.0 {
            height / vertical_scale
        } else {
            height
        };
        self.layout.band_y = height - self.layout.band_height;
    }
}

/// True at defined bucket boundaries: rounded scale is a multiple of 0.5.
#[must_use]
pub fn is_bucket_boundary(rounded_scale: f64) -> bool {
    if !rounded_scale.is_finite() {
        return false;
    }
    ((rounded_scale * 10.0).round() as i64) % 5 == 0
}

/// Maps every visible series to left-to-right polyline segments.
///
/// Data index `i` maps to `i * (width / point_count)`; values map against
/// the visible series' full min/max so the content covers the whole
/// zoomable extent. Hidden series contribute nothing; with no visible
/// series the result is empty.
#[must_use]
pub fn build_polylines(chart: &Chart, width: f64, height: f64, stroke_width: f64) -> Vec<LinePrimitive> {
    let point_count = chart.point_count();
    if point_count < 2 {
        return Vec::new();
    }

    let (min, max) = chart.visible_value_range();
    let range = max - min;
    let step_x = width / point_count as f64;
    let map_y = |value: f64| {
        if range > 0.0 {
            height * (max - value) / range
        } else {
            height * 0.5
        }
    };

    let mut segments = Vec::new();
    for series in chart.series().iter().filter(|s| s.is_visible()) {
        for (index, pair) in series.values().windows(2).enumerate() {
            segments.push(LinePrimitive::new(
                index as f64 * step_x,
                map_y(pair[0]),
                (index + 1) as f64 * step_x,
                map_y(pair[1]),
                stroke_width,
                series.color(),
            ));
        }
    }
    segments
}

/// Thin-stroke full-range polylines for the range-selector preview strip.
#[must_use]
pub fn build_preview_polylines(chart: &Chart, width: f64, height: f64) -> Vec<LinePrimitive> {
    build_polylines(chart, width, height, PREVIEW_STROKE_WIDTH)
}
