use criterion::{Criterion, black_box, criterion_group, criterion_main};
use udaya_kernel::chebyshev::{clenshaw, clenshaw_derivative};
use udaya_kernel::{SpkKernel, SpkWriter, Type2Segment};

fn chebyshev_bench(c: &mut Criterion) {
    let coeffs: Vec<f64> = (0..13).map(|k| 1.0 / (k as f64 + 1.0)).collect();

    let mut group = c.benchmark_group("chebyshev");
    group.bench_function("clenshaw_13", |b| {
        b.iter(|| clenshaw(black_box(&coeffs), black_box(0.37)))
    });
    group.bench_function("clenshaw_derivative_13", |b| {
        b.iter(|| clenshaw_derivative(black_box(&coeffs), black_box(0.37)))
    });
    group.finish();
}

fn evaluate_bench(c: &mut Criterion) {
    let (start, end) = (-1.0e7, 1.0e7);
    let mut writer = SpkWriter::new();
    writer
        .add_segment(Type2Segment::linear(
            3,
            0,
            start,
            end,
            [1.0e8, 0.0, 0.0],
            [0.0, 30.0, 0.0],
        ))
        .add_segment(Type2Segment::stationary(399, 3, start, end, [4_670.0, 0.0, 0.0]));
    let Ok(bytes) = writer.to_bytes() else { return };
    let Ok(kernel) = SpkKernel::parse(bytes) else { return };

    let mut group = c.benchmark_group("spk");
    group.bench_function("evaluate_emb", |b| {
        b.iter(|| kernel.evaluate(3, 0, black_box(1234.5)))
    });
    group.bench_function("resolve_earth_to_ssb", |b| {
        b.iter(|| kernel.resolve_to_ssb(399, black_box(1234.5)))
    });
    group.finish();
}

criterion_group!(benches, chebyshev_bench, evaluate_bench);
criterion_main!(benches);
