use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hoststat::report::buffer::RoundBuffer;
use hoststat::report::display::RefreshMode;
use hoststat::report::graph::{cpu_graph, memory_graph};
use std::hint::black_box;

fn bench_cpu_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_graph");
    for usage in [0.0f64, 37.5, 100.0] {
        group.bench_with_input(BenchmarkId::from_parameter(usage), &usage, |b, &usage| {
            b.iter(|| cpu_graph(black_box(usage)));
        });
    }
    group.finish();
}

fn bench_memory_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_graph");
    for delta in [-0.75f64, 0.0, 0.005, 2.5] {
        group.bench_with_input(BenchmarkId::from_parameter(delta), &delta, |b, &delta| {
            b.iter(|| memory_graph(black_box(delta), 4.0));
        });
    }
    group.finish();
}

fn bench_frame_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_100_1000_10000");

    for size in [100usize, 1000, 10_000] {
        let mut buffer = RoundBuffer::new(size);
        for round in 0..size {
            let _ = buffer.record(round, cpu_graph((round % 100) as f64));
        }
        let last = size - 1;
        group.bench_with_input(BenchmarkId::from_parameter(size), &buffer, |b, buffer| {
            b.iter(|| {
                black_box(RefreshMode::InPlace.frame(black_box(buffer), last, true));
                black_box(RefreshMode::Sequential.frame(black_box(buffer), last, false));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_cpu_graph,
    bench_memory_graph,
    bench_frame_assembly
);
criterion_main!(benches);
