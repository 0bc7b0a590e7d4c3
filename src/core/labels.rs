//! Per-zoom-level x-axis label subsets, precomputed at chart load.
//!
//! Label density on screen stays visually constant as horizontal scale
//! grows: the subset for zoom bucket `k` holds at most `k * 6` labels
//! regardless of how long the underlying series is.

use chrono::DateTime;
use smallvec::SmallVec;

/// Number of precomputed zoom levels.
pub const ZOOM_LEVELS: usize = 5;

/// Labels shown per viewport width at the base zoom level.
pub const TARGET_LABEL_COUNT: usize = 6;

/// One selected x-axis entry with its rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabel {
    pub timestamp: i64,
    pub text: String,
}

/// Immutable set of downsampled label subsets, indexed by zoom bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlan {
    subsets: SmallVec<[Vec<AxisLabel>; ZOOM_LEVELS]>,
}

impl LabelPlan {
    /// Builds all subsets from the full x axis (epoch seconds).
    #[must_use]
    pub fn build(x_axis: &[i64]) -> Self {
        let mut subsets = SmallVec::new();
        for level in 1..=ZOOM_LEVELS {
            let take = level * TARGET_LABEL_COUNT - 1;
            let stride = (x_axis.len() / take).max(1);

            let mut subset: Vec<AxisLabel> = x_axis
                .iter()
                .step_by(stride)
                .map(|&timestamp| AxisLabel {
                    timestamp,
                    text: format_timestamp(timestamp),
                })
                .collect();
            subset.truncate(level * TARGET_LABEL_COUNT);
            subsets.push(subset);
        }

        Self { subsets }
    }

    /// Subset for zoom level `level`, clamped into `1..=ZOOM_LEVELS`.
    #[must_use]
    pub fn subset_for_level(&self, level: usize) -> &[AxisLabel] {
        let index = level.clamp(1, ZOOM_LEVELS) - 1;
        &self.subsets[index]
    }

    /// Subset selected by the coarse zoom-bucket key.
    ///
    /// The plan index is the integer part of `rounded_scale`, so the
    /// displayed subset only changes together with bucket crossings.
    #[must_use]
    pub fn subset_for_scale(&self, rounded_scale: f64) -> &[AxisLabel] {
        let level = if rounded_scale.is_finite() {
            rounded_scale.trunc() as i64
        } else {
            1
        };
        self.subset_for_level(level.clamp(1, ZOOM_LEVELS as i64) as usize)
    }
}

/// Formats an epoch-seconds timestamp as "MMM d", e.g. "Mar 21".
#[must_use]
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(datetime) => datetime.format("%b %-d").to_string(),
        None => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsets_are_bounded_per_level() {
        let axis: Vec<i64> = (0..365i64).map(|day| 1_542_412_800 + day * 86_400).collect();
        let plan = LabelPlan::build(&axis);

        for level in 1..=ZOOM_LEVELS {
            assert!(plan.subset_for_level(level).len() <= level * TARGET_LABEL_COUNT);
        }
    }

    #[test]
    fn short_axis_never_overflows_base_bucket() {
        // 9 entries with stride 1 would select all of them without the cap.
        let axis: Vec<i64> = (0..9i64).map(|i| i * 3600).collect();
        let plan = LabelPlan::build(&axis);
        assert!(plan.subset_for_level(1).len() <= TARGET_LABEL_COUNT);
    }

    #[test]
    fn format_uses_month_and_day() {
        // 2019-03-21 00:00:00 UTC
        assert_eq!(format_timestamp(1_553_126_400), "Mar 21");
    }
}
