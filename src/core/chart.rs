use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Series, Window, scale};
use crate::error::{ChartError, ChartResult};

/// Viewport-derived scale fields, recomputed on every window change.
///
/// These are never assigned independently; they are always a pure function of
/// (x axis, visible series values, window).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedScales {
    /// Max visible value over the entire x range.
    pub total_max_y: f64,
    /// Max visible value restricted to the active window.
    pub current_max_y: f64,
    /// Content-width multiplier, `1 / (upper - lower)`.
    pub horizontal_scale: f64,
    /// `current_max_y / total_max_y`, rounded to six decimal places.
    pub vertical_scale: f64,
    /// Horizontal scale rounded to one decimal place; the zoom-bucket key.
    pub rounded_scale: f64,
}

/// The mutable aggregate owned by the viewport subsystem: shared x axis,
/// ordered series collection (insertion order = legend order), and the
/// derived scale fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    x: Vec<i64>,
    series: Vec<Series>,
    scales: DerivedScales,
}

impl Chart {
    /// Builds a chart from an epoch-seconds x axis and its series.
    ///
    /// The x axis must be strictly increasing and every series must carry
    /// exactly one value per x entry.
    pub fn new(x: Vec<i64>, series: Vec<Series>) -> ChartResult<Self> {
        if x.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(ChartError::InvalidDataset(
                "x axis must be strictly increasing".to_owned(),
            ));
        }

        for entry in &series {
            if entry.values().len() != x.len() {
                return Err(ChartError::InvalidDataset(format!(
                    "series `{}` has {} values for {} x entries",
                    entry.id(),
                    entry.values().len(),
                    x.len()
                )));
            }
        }

        Ok(Self {
            x,
            series,
            scales: DerivedScales::default(),
        })
    }

    #[must_use]
    pub fn x(&self) -> &[i64] {
        &self.x
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn scales(&self) -> DerivedScales {
        self.scales
    }

    /// Toggles one series and reports whether the id was known.
    ///
    /// The caller is responsible for routing the toggle through the same
    /// recompute path as a window change; [`ChartEngine`] does both.
    ///
    /// [`ChartEngine`]: crate::api::ChartEngine
    pub fn set_series_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.series.iter_mut().find(|s| s.id() == id) {
            Some(series) => {
                series.set_visible(visible);
                true
            }
            None => {
                warn!(series_id = id, "visibility toggle for unknown series");
                false
            }
        }
    }

    /// Recomputes every derived field for `window`.
    pub(crate) fn recompute(&mut self, window: Window) {
        let total = scale::total_max_y(&self.series);
        let current = scale::current_max_y(&self.series, window.lower(), window.upper());
        let horizontal = scale::horizontal_scale(window.lower(), window.upper());

        self.scales = DerivedScales {
            total_max_y: total,
            current_max_y: current,
            horizontal_scale: horizontal,
            vertical_scale: scale::vertical_scale(total, current),
            rounded_scale: scale::rounded_scale(horizontal),
        };
    }

    /// Min/max across all visible series' full values; `(0, 0)` when nothing
    /// is visible. Geometry uses the full range so the rendered content
    /// covers the whole zoomable extent.
    #[must_use]
    pub fn visible_value_range(&self) -> (f64, f64) {
        let mut values = self
            .series
            .iter()
            .filter(|s| s.is_visible())
            .flat_map(|s| s.values().iter().copied());

        let Some(first) = values.next() else {
            return (0.0, 0.0);
        };
        values.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }
}
