//! linechart-rs: windowed line-chart viewport engine.
//!
//! Renders time-aligned numeric series as a zoomable/scrollable line chart
//! driven by a draggable normalized window `[lower, upper] ⊆ [0, 1]`. The
//! crate couples continuous pointer-drag input to discrete redraw
//! decisions: polyline geometry is regenerated only at coarse zoom-bucket
//! boundaries, vertical grid/rescale work is debounced, and precomputed
//! axis-label subsets switch in lockstep with bucket crossings.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod schedule;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
