use criterion::{Criterion, criterion_group, criterion_main};
use pan_chart::core::{
    BoundedSeries, IdentityParser, SamplePoint, ScrollPosition, Viewport, pixel_to_scroll,
    project_series, scroll_to_pixel,
};
use std::hint::black_box;

fn bench_scroll_round_trip(c: &mut Criterion) {
    let position = ScrollPosition::canonical(4_321, 0.123);

    c.bench_function("scroll_round_trip", |b| {
        b.iter(|| {
            let px = scroll_to_pixel(black_box(position), black_box(24.0));
            let _ = pixel_to_scroll(px, 24.0);
        })
    });
}

fn bench_series_projection_10k(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let series: BoundedSeries<SamplePoint> = (0..10_000)
        .map(|i| {
            let x = f64::from(i);
            SamplePoint::new(x, (x * 0.05).sin() * 100.0)
        })
        .collect();
    let parser = IdentityParser;
    let position = ScrollPosition::canonical(5_000, 0.0);

    c.bench_function("series_projection_10k", |b| {
        b.iter(|| {
            let points = project_series(
                black_box(&series),
                black_box(&parser),
                black_box(position),
                black_box(12.0),
                black_box(viewport),
            );
            let count = points.count();
            black_box(count);
        })
    });
}

criterion_group!(
    benches,
    bench_scroll_round_trip,
    bench_series_projection_10k
);
criterion_main!(benches);
