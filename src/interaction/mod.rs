//! Pointer-drag state machine for the range-selector window.
//!
//! The controller owns the normalized window, converts pixel deltas into
//! window deltas, keeps derived chart fields consistent through every
//! transition, and publishes typed events for renderer and host UI.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Chart, DerivedScales, Window};
use crate::error::{ChartError, ChartResult};

/// Fixed pixel width of each draggable edge handle.
pub const HANDLE_WIDTH: f64 = 13.0;

/// Vertical inset of the selector track from the control's edges.
const TRACK_INSET: f64 = 3.0;
const BORDER_HEIGHT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DragMode {
    #[default]
    Idle,
    DraggingLeftEdge,
    DraggingRightEdge,
    DraggingWindow,
}

/// Axis-aligned pixel rectangle used for hit testing and selector chrome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPx {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectPx {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.x + self.width
    }
}

/// Pixel layout of the range-selector control for the current window.
///
/// The same rectangles drive pointer hit testing and host-side chrome
/// drawing, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorLayout {
    pub left_handle: RectPx,
    pub right_handle: RectPx,
    pub interior: RectPx,
    pub left_dim: RectPx,
    pub right_dim: RectPx,
    pub top_border: RectPx,
    pub bottom_border: RectPx,
}

/// Typed event published by the controller.
///
/// `Initialized` fires on attach so consumers can seed caches without
/// implying a drag occurred; `VisibilityChanged` carries the same recompute
/// as `WindowChanged` without a window delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewportEvent {
    Initialized {
        window: Window,
        scales: DerivedScales,
    },
    WindowChanged {
        window: Window,
        scales: DerivedScales,
    },
    VisibilityChanged {
        window: Window,
        scales: DerivedScales,
    },
}

impl ViewportEvent {
    #[must_use]
    pub fn window(self) -> Window {
        match self {
            Self::Initialized { window, .. }
            | Self::WindowChanged { window, .. }
            | Self::VisibilityChanged { window, .. } => window,
        }
    }

    #[must_use]
    pub fn scales(self) -> DerivedScales {
        match self {
            Self::Initialized { scales, .. }
            | Self::WindowChanged { scales, .. }
            | Self::VisibilityChanged { scales, .. } => scales,
        }
    }
}

/// Owns window state and the drag state machine.
#[derive(Debug)]
pub struct ViewportController {
    window: Window,
    drag_mode: DragMode,
    last_pointer_x: f64,
    selector_width: f64,
    selector_height: f64,
    events: Vec<ViewportEvent>,
}

impl ViewportController {
    pub fn new(selector_width: f64, selector_height: f64) -> ChartResult<Self> {
        if !selector_width.is_finite()
            || !selector_height.is_finite()
            || selector_width <= HANDLE_WIDTH * 2.0
            || selector_height <= 0.0
        {
            return Err(ChartError::InvalidData(format!(
                "selector size {selector_width}x{selector_height} cannot host two {HANDLE_WIDTH}px handles"
            )));
        }

        Ok(Self {
            window: Window::default(),
            drag_mode: DragMode::Idle,
            last_pointer_x: 0.0,
            selector_width,
            selector_height,
            events: Vec::new(),
        })
    }

    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.drag_mode
    }

    /// Recomputes derived fields for the current window and emits
    /// `Initialized`. Called when a chart is first bound to the controller.
    pub fn attach(&mut self, chart: &mut Chart) {
        chart.recompute(self.window);
        self.events.push(ViewportEvent::Initialized {
            window: self.window,
            scales: chart.scales(),
        });
    }

    /// Routes a visibility toggle through the same recompute path as a
    /// window change and emits `VisibilityChanged`.
    pub fn apply_visibility_change(&mut self, chart: &mut Chart) {
        chart.recompute(self.window);
        self.events.push(ViewportEvent::VisibilityChanged {
            window: self.window,
            scales: chart.scales(),
        });
    }

    /// Starts a drag gesture if the pointer hits a handle or the interior
    /// band. Returns `false` (staying Idle) when nothing is hit.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let layout = self.selector_layout();

        self.drag_mode = if layout.left_handle.contains(x, y) {
            DragMode::DraggingLeftEdge
        } else if layout.right_handle.contains(x, y) {
            DragMode::DraggingRightEdge
        } else if layout.interior.contains(x, y) {
            DragMode::DraggingWindow
        } else {
            return false;
        };

        self.last_pointer_x = x;
        debug!(mode = ?self.drag_mode, "drag started");
        true
    }

    /// Applies a pointer-move delta while dragging.
    ///
    /// Returns `true` when the window changed (and `WindowChanged` was
    /// emitted); out-of-bounds whole-window moves are silent no-ops.
    pub fn pointer_move(&mut self, chart: &mut Chart, x: f64) -> bool {
        if self.drag_mode == DragMode::Idle {
            return false;
        }

        let delta = (x - self.last_pointer_x) / (self.selector_width - HANDLE_WIDTH);
        self.last_pointer_x = x;

        let applied = match self.drag_mode {
            DragMode::Idle => false,
            DragMode::DraggingWindow => self.window.shift(delta),
            DragMode::DraggingLeftEdge => {
                self.window.move_lower(delta);
                true
            }
            DragMode::DraggingRightEdge => {
                self.window.move_upper(delta);
                true
            }
        };

        if applied {
            chart.recompute(self.window);
            self.events.push(ViewportEvent::WindowChanged {
                window: self.window,
                scales: chart.scales(),
            });
        }
        applied
    }

    /// Ends the gesture; window values persist.
    pub fn pointer_up(&mut self) {
        self.drag_mode = DragMode::Idle;
    }

    /// Cancellation is indistinguishable from pointer-up: drag flags are
    /// discarded and the window keeps its last clamped values.
    pub fn pointer_cancel(&mut self) {
        self.drag_mode = DragMode::Idle;
    }

    /// Takes all events published since the last drain, in order.
    #[must_use]
    pub fn drain_events(&mut self) -> Vec<ViewportEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn selector_layout(&self) -> SelectorLayout {
        let width = self.selector_width;
        let height = self.selector_height;
        let track_y = TRACK_INSET;
        let track_height = height - TRACK_INSET * 2.0;

        let left_handle = RectPx {
            x: width * self.window.lower(),
            y: 0.0,
            width: HANDLE_WIDTH,
            height,
        };
        let right_handle = RectPx {
            x: width * self.window.upper() - HANDLE_WIDTH,
            y: 0.0,
            width: HANDLE_WIDTH,
            height,
        };
        let interior = RectPx {
            x: left_handle.max_x(),
            y: 0.0,
            width: (right_handle.x - left_handle.max_x()).max(0.0),
            height,
        };

        SelectorLayout {
            left_handle,
            right_handle,
            interior,
            left_dim: RectPx {
                x: HANDLE_WIDTH,
                y: track_y,
                width: left_handle.x.max(0.0),
                height: track_height,
            },
            right_dim: RectPx {
                x: right_handle.max_x(),
                y: track_y,
                width: (width - right_handle.max_x() - HANDLE_WIDTH).max(0.0),
                height: track_height,
            },
            top_border: RectPx {
                x: left_handle.max_x(),
                y: 0.0,
                width: interior.width,
                height: BORDER_HEIGHT,
            },
            bottom_border: RectPx {
                x: left_handle.max_x(),
                y: height - BORDER_HEIGHT,
                width: interior.width,
                height: BORDER_HEIGHT,
            },
        }
    }
}
