//! Benchmarks for figure population and rendering.
//!
//! Run:
//! - cargo bench --bench render_figure

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ipc_charts::chart::figure::ComparisonFigure;
use ipc_charts::chart::{ComparisonChartBuilder, FigureStyle};
use ipc_charts::config::RunConfig;
use ipc_charts::report::MetricKind;

const DPIS: [u32; 3] = [75, 150, 300];

fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("populate");
    let run = RunConfig::default();
    for kind in MetricKind::ALL {
        let datasets = vec![kind.dataset().unwrap()];
        let layout = kind.layout(&run);
        group.bench_with_input(
            BenchmarkId::from_parameter(kind.file_stem()),
            &datasets,
            |b, datasets| {
                b.iter(|| ComparisonFigure::populate(black_box(datasets), &layout).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_render_png(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png");
    group.sample_size(10);
    let dir = tempfile::tempdir().unwrap();
    let kind = MetricKind::CacheMisses;
    let datasets = vec![kind.dataset().unwrap()];
    let layout = kind.layout(&RunConfig::default());
    for dpi in DPIS {
        let mut builder = ComparisonChartBuilder::new(FigureStyle::default().with_size(18.0, 6.0, dpi));
        let path = dir.path().join(format!("bench_{dpi}.png"));
        group.bench_with_input(BenchmarkId::from_parameter(dpi), &dpi, |b, _| {
            b.iter(|| builder.render(black_box(&datasets), &layout, &path).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_populate, bench_render_png);
criterion_main!(benches);
