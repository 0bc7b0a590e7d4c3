//! Pure scale math over visible series and a normalized window.
//!
//! Every function here is total: degenerate inputs (no visible series, zero
//! total) yield `0.0` rather than an error, so interaction-time arithmetic
//! can never fail.

use crate::core::Series;

/// How many times wider the rendered content must be than the viewport so a
/// horizontal crop shows exactly `[lower, upper]` of the full series.
#[must_use]
pub fn horizontal_scale(lower: f64, upper: f64) -> f64 {
    1.0 / (upper - lower)
}

/// Maximum value across all visible series over the entire x range.
///
/// `0.0` only when no visible value exists; an all-negative series keeps
/// its true (negative) maximum.
#[must_use]
pub fn total_max_y(series: &[Series]) -> f64 {
    series
        .iter()
        .filter(|s| s.is_visible())
        .flat_map(|s| s.values().iter().copied())
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Maximum value across all visible series restricted to the window's index
/// range `[floor(count * |lower|), floor(count * |upper|))`. `0.0` only when
/// that slice is empty across every visible series.
#[must_use]
pub fn current_max_y(series: &[Series], lower: f64, upper: f64) -> f64 {
    series
        .iter()
        .filter(|s| s.is_visible())
        .flat_map(|s| {
            let (start, end) = window_index_range(s.values().len(), lower, upper);
            s.values()[start..end].iter().copied()
        })
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Ratio used to vertically rescale rendered content so the windowed maximum
/// reaches the top of the viewport. Defined as `0.0` when `total == 0`.
#[must_use]
pub fn vertical_scale(total: f64, current: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round_to_places(current / total, 6)
}

/// Coarse zoom-bucket key: horizontal scale rounded to one decimal place.
#[must_use]
pub fn rounded_scale(horizontal_scale: f64) -> f64 {
    round_to_places(horizontal_scale, 1)
}

/// Clamps `value` into `[lower, upper]`.
#[must_use]
pub fn bound(value: f64, lower: f64, upper: f64) -> f64 {
    value.max(lower).min(upper)
}

/// Index range selected by a normalized window over `len` samples.
///
/// Both window bounds are taken by absolute value and the resulting indices
/// are clamped into `0..=len`, so any float input maps to a valid range.
#[must_use]
pub fn window_index_range(len: usize, lower: f64, upper: f64) -> (usize, usize) {
    let count = len as f64;
    let start = ((count * lower.abs()).floor() as usize).min(len);
    let end = ((count * upper.abs()).floor() as usize).min(len);
    (start, end.max(start))
}

pub(crate) fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
