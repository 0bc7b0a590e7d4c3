use criterion::{Criterion, criterion_group, criterion_main};
use linechart_rs::core::{Chart, LabelPlan, Series, scale};
use linechart_rs::render::{Color, build_polylines};
use std::hint::black_box;

fn synthetic_chart(points: usize, series_count: usize) -> Chart {
    let x: Vec<i64> = (0..points as i64)
        .map(|i| 1_542_412_800 + i * 3_600)
        .collect();
    let series: Vec<Series> = (0..series_count)
        .map(|s| {
            let values: Vec<f64> = (0..points)
                .map(|i| {
                    let t = i as f64 * 0.01 + s as f64;
                    100.0 + t.sin() * 40.0 + (i % 37) as f64
                })
                .collect();
            Series::new(
                format!("y{s}"),
                format!("#{s}"),
                Color::rgb(0.2, 0.5, 0.8),
                values,
            )
        })
        .collect();
    Chart::new(x, series).expect("valid generated chart")
}

fn bench_windowed_max_10k(c: &mut Criterion) {
    let chart = synthetic_chart(10_000, 4);

    c.bench_function("windowed_max_10k", |b| {
        b.iter(|| {
            let _ = scale::current_max_y(
                black_box(chart.series()),
                black_box(0.3),
                black_box(0.8),
            );
        })
    });
}

fn bench_polyline_build_10k(c: &mut Criterion) {
    let chart = synthetic_chart(10_000, 2);

    c.bench_function("polyline_build_10k", |b| {
        b.iter(|| {
            let _ = build_polylines(
                black_box(&chart),
                black_box(2_000.0),
                black_box(600.0),
                black_box(2.0),
            );
        })
    });
}

fn bench_label_plan_build_1y(c: &mut Criterion) {
    let axis: Vec<i64> = (0..365i64).map(|day| 1_542_412_800 + day * 86_400).collect();

    c.bench_function("label_plan_build_1y", |b| {
        b.iter(|| {
            let _ = LabelPlan::build(black_box(&axis));
        })
    });
}

criterion_group!(
    benches,
    bench_windowed_max_10k,
    bench_polyline_build_10k,
    bench_label_plan_build_1y
);
criterion_main!(benches);
