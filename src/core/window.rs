use serde::{Deserialize, Serialize};

use crate::core::scale::bound;
use crate::error::{ChartError, ChartResult};

/// Smallest allowed normalized window span.
pub const MIN_WINDOW: f64 = 0.2;

/// Normalized `[lower, upper]` sub-range of the full series currently shown.
///
/// Invariant, preserved by every mutation: `0 <= lower`, `upper <= 1` and
/// `upper - lower >= MIN_WINDOW`. Drag deltas that would violate it are
/// absorbed by clamping, never rejected with an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    lower: f64,
    upper: f64,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            lower: 0.3,
            upper: 0.8,
        }
    }
}

impl Window {
    pub fn new(lower: f64, upper: f64) -> ChartResult<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(ChartError::InvalidData(
                "window bounds must be finite".to_owned(),
            ));
        }
        if lower < 0.0 || upper > 1.0 || upper - lower < MIN_WINDOW {
            return Err(ChartError::InvalidData(format!(
                "window [{lower}, {upper}] violates 0 <= lower, upper <= 1, span >= {MIN_WINDOW}"
            )));
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    /// Moves the whole window by `delta`.
    ///
    /// Returns `false` without changing anything when the shifted window
    /// would leave `[0, 1]`; the gesture is a silent no-op in that case.
    pub(crate) fn shift(&mut self, delta: f64) -> bool {
        let lower = self.lower + delta;
        let upper = self.upper + delta;
        if lower < 0.0 || upper > 1.0 {
            return false;
        }

        self.lower = bound(lower, 0.0, upper - MIN_WINDOW);
        self.upper = bound(upper, self.lower + MIN_WINDOW, 1.0);
        true
    }

    /// Moves the lower edge by `delta`, clamped to `[0, upper - MIN_WINDOW]`.
    pub(crate) fn move_lower(&mut self, delta: f64) {
        self.lower = bound(self.lower + delta, 0.0, self.upper - MIN_WINDOW);
    }

    /// Moves the upper edge by `delta`, clamped to `[lower + MIN_WINDOW, 1]`.
    pub(crate) fn move_upper(&mut self, delta: f64) {
        self.upper = bound(self.upper + delta, self.lower + MIN_WINDOW, 1.0);
    }
}
