use criterion::{Criterion, criterion_group, criterion_main};
use scenechart::core::{Length, Point};
use scenechart::elements::{Element, Slice, WavedCircle};
use scenechart::render::Tension;
use std::hint::black_box;

fn bench_wave_points_large_circle(c: &mut Criterion) {
    let mut circle = WavedCircle::new();
    circle.set_radius(500.0);
    circle.set_wave_length(8.0);
    circle.set_wave_height(4.0);

    c.bench_function("wave_points_large_circle", |b| {
        b.iter(|| {
            let points = circle.wave_points(black_box(500.0));
            black_box(points);
        })
    });
}

fn bench_waved_circle_draw_with_inner_contour(c: &mut Criterion) {
    let mut circle = WavedCircle::new();
    circle.set_radius(200.0);
    circle.set_inner_radius(Length::Pixels(120.0));
    circle.set_wave_length(16.0);
    circle.set_wave_height(4.0);

    c.bench_function("waved_circle_draw_with_inner_contour", |b| {
        b.iter(|| {
            circle.node_mut().mark_dirty();
            circle.draw();
            black_box(circle.path_data().len());
        })
    });
}

fn bench_tension_smoothing_1k_points(c: &mut Criterion) {
    let smoother = Tension::new(0.8, 0.8);
    let points: Vec<Point> = (0..1_000)
        .map(|i| {
            let angle = (i as f64) * std::f64::consts::TAU / 1_000.0;
            Point::new(100.0 * angle.cos(), 100.0 * angle.sin())
        })
        .collect();

    c.bench_function("tension_smoothing_1k_points", |b| {
        b.iter(|| {
            let data = smoother.smooth(black_box(&points));
            black_box(data);
        })
    });
}

fn bench_slice_ring_path(c: &mut Criterion) {
    let mut slice = Slice::new();
    slice.set_radius(53.0);
    slice.set_inner_radius(42.0);
    slice.set_arc_degrees(360.0);

    c.bench_function("slice_ring_path", |b| {
        b.iter(|| {
            slice.node_mut().mark_dirty();
            slice.draw();
            black_box(slice.path_data().len());
        })
    });
}

criterion_group!(
    benches,
    bench_wave_points_large_circle,
    bench_waved_circle_draw_with_inner_contour,
    bench_tension_smoothing_1k_points,
    bench_slice_ring_path
);
criterion_main!(benches);
