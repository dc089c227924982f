use barchart_core::{bar_rects, BarChart, PlotArea, RecordingSurface};
use barchart_core::types::Insets;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn dataset(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i as f64 * 0.37).sin() + 1.5) * 40.0).collect()
}

fn bench_layout(c: &mut Criterion) {
    let plot = PlotArea::from_surface(1200, 600, &Insets::default());
    let mut group = c.benchmark_group("bar_rects");
    for &n in &[10usize, 1_000usize] {
        let data = dataset(n);
        group.bench_function(format!("n_{n}"), |b| b.iter(|| black_box(bar_rects(&data, &plot))));
    }
    group.finish();
}

fn bench_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("redraw_recording");
    for &n in &[10usize, 500usize] {
        let mut chart = BarChart::new(RecordingSurface::new(1, 1)).expect("chart");
        chart.set_size(1200, 600).expect("size");
        chart.set_data(dataset(n)).expect("data");
        chart.set_categories((0..n).map(|i| format!("c{i}")));
        group.bench_function(format!("n_{n}"), |b| {
            b.iter(|| {
                chart.redraw();
                black_box(chart.surface().commands().len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_redraw);
criterion_main!(benches);
