use linechart_rs::core::{Series, scale};
use linechart_rs::render::Color;
use proptest::prelude::*;

fn series(values: &[f64]) -> Series {
    Series::new("y0", "Joined", Color::rgb(0.2, 0.7, 0.2), values.to_vec())
}

fn hidden(values: &[f64]) -> Series {
    let mut chart =
        linechart_rs::core::Chart::new((0..values.len() as i64).collect(), vec![series(values)])
            .expect("valid chart");
    assert!(chart.set_series_visible("y0", false));
    chart.series()[0].clone()
}

#[test]
fn horizontal_scale_is_exact_reciprocal_of_span() {
    assert_eq!(scale::horizontal_scale(0.3, 0.8), 2.0);
    assert_eq!(scale::horizontal_scale(0.0, 1.0), 1.0);
    assert_eq!(scale::horizontal_scale(0.0, 0.2), 5.0);
}

#[test]
fn worked_example_from_ten_point_axis() {
    let all = [series(&[1.0, 5.0, 2.0, 8.0, 3.0, 9.0, 4.0, 7.0, 6.0, 0.0])];

    let total = scale::total_max_y(&all);
    let current = scale::current_max_y(&all, 0.3, 0.8);

    assert_eq!(total, 9.0);
    assert_eq!(current, 9.0);
    assert_eq!(scale::vertical_scale(total, current), 1.0);
    assert_eq!(scale::horizontal_scale(0.3, 0.8), 2.0);
    assert_eq!(scale::rounded_scale(scale::horizontal_scale(0.3, 0.8)), 2.0);
}

#[test]
fn windowed_maximum_uses_floor_index_bounds() {
    // Indices [3, 8) select values [8, 3, 9, 4, 7].
    let all = [series(&[1.0, 5.0, 2.0, 8.0, 3.0, 9.0, 4.0, 7.0, 6.0, 0.0])];
    assert_eq!(scale::current_max_y(&all, 0.3, 0.8), 9.0);

    // Indices [0, 3) avoid every peak.
    assert_eq!(scale::current_max_y(&all, 0.0, 0.3), 5.0);
}

#[test]
fn vertical_scale_is_zero_when_total_is_zero() {
    assert_eq!(scale::vertical_scale(0.0, 0.0), 0.0);
    assert_eq!(scale::vertical_scale(0.0, 5.0), 0.0);
}

#[test]
fn extrema_ignore_hidden_series() {
    let visible = series(&[1.0, 2.0, 3.0]);
    let tall_hidden = hidden(&[100.0, 100.0, 100.0]);
    let all = [visible, tall_hidden];

    assert_eq!(scale::total_max_y(&all), 3.0);
    assert_eq!(scale::current_max_y(&all, 0.0, 1.0), 3.0);
}

#[test]
fn negative_only_data_is_distinguishable_from_no_data() {
    let all = [series(&[-5.0, -2.0, -9.0])];
    assert_eq!(scale::total_max_y(&all), -2.0);
    assert_eq!(scale::current_max_y(&all, 0.0, 1.0), -2.0);

    // Only the truly empty case falls back to zero.
    let none = [hidden(&[-5.0, -2.0, -9.0])];
    assert_eq!(scale::total_max_y(&none), 0.0);
    assert_eq!(scale::current_max_y(&none, 0.0, 1.0), 0.0);
}

proptest! {
    #[test]
    fn current_never_exceeds_total(
        values in prop::collection::vec(0.0f64..1e6, 1..200),
        lower in 0.0f64..0.8,
        span in 0.2f64..1.0,
    ) {
        let upper = (lower + span).min(1.0);
        let all = [series(&values)];
        let total = scale::total_max_y(&all);
        let current = scale::current_max_y(&all, lower, upper);
        prop_assert!(current <= total);
    }

    #[test]
    fn rounded_scale_is_monotonic_as_window_narrows(
        center in 0.3f64..0.7,
        spans in prop::collection::vec(0.2f64..0.6, 2..10),
    ) {
        let mut spans = spans;
        spans.sort_by(|a, b| b.partial_cmp(a).expect("finite spans"));

        let mut previous = f64::NEG_INFINITY;
        for span in spans {
            let half = span / 2.0;
            let (lower, upper) = ((center - half).max(0.0), (center + half).min(1.0));
            let rounded = scale::rounded_scale(scale::horizontal_scale(lower, upper));
            prop_assert!(rounded >= previous);
            previous = rounded;
        }
    }
}
