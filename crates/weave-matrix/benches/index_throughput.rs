use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weave_core::Sequence;
use weave_matrix::{describe, paths, Matrix};

fn bucket(tag: &str, prefix: &str, n: u64) -> Matrix<String> {
    let leaves = (0..n)
        .map(|i| Matrix::single(format!("{prefix}{i}")))
        .collect();
    Matrix::mix(tag.to_string(), leaves).unwrap()
}

fn suite() -> Matrix<String> {
    let pair = Matrix::product(
        "pair".to_string(),
        vec![
            bucket("os", "o", 12),
            bucket("fs", "f", 18),
            bucket("flags", "g", 7),
        ],
    )
    .unwrap();
    Matrix::mix(
        "suite".to_string(),
        vec![pair, bucket("extra", "x", 64)],
    )
    .unwrap()
}

fn join(a: &str, b: &str) -> String {
    format!("{a}/{b}")
}

fn bench_index_scan(c: &mut Criterion) {
    let matrix = suite();
    let window = matrix.min_scan_len().min(4096);
    c.bench_function("index_scan_window", |b| {
        b.iter(|| {
            for i in 0..window {
                black_box(matrix.index(black_box(i)).unwrap());
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let matrix = suite();
    let selection = matrix.index(17).unwrap();
    c.bench_function("describe_selection", |b| {
        b.iter(|| black_box(describe(black_box(&selection), join)))
    });
    c.bench_function("paths_selection", |b| {
        b.iter(|| black_box(paths(black_box(&selection), "/suites", join)))
    });
}

criterion_group!(benches, bench_index_scan, bench_render);
criterion_main!(benches);
