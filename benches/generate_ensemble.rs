use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sky_sim::catalogue_io::write_catalogue;
use sky_sim::ensemble::generate;
use sky_sim::reference::{resolve, ReferencePoint};

fn m31() -> ReferencePoint {
    resolve("00:42:44.3", "41:16:09").unwrap()
}

/// Classic run size: 1000 stars
fn bench_generate_default(c: &mut Criterion) {
    let reference = m31();

    c.bench_function("generate/1_000", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(0xDEADBEEF),
            |mut rng| black_box(generate(black_box(reference), 1_000, &mut rng).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

/// Large ensemble: 1M stars
fn bench_generate_large(c: &mut Criterion) {
    let reference = m31();

    c.bench_function("generate/1_000_000", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(0xBADF00D),
            |mut rng| black_box(generate(black_box(reference), 1_000_000, &mut rng).unwrap()),
            BatchSize::LargeInput,
        )
    });
}

/// Formatting cost of the catalogue writer, into memory
fn bench_write(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let catalogue = generate(m31(), 100_000, &mut rng).unwrap();

    c.bench_function("write_catalogue/100_000", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(4 << 20);
            write_catalogue(black_box(&catalogue), &mut buf).unwrap();
            black_box(buf);
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve/andromeda", |b| {
        b.iter(|| resolve(black_box("00:42:44.3"), black_box("41:16:09")).unwrap())
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_generate_default, bench_generate_large, bench_write, bench_resolve
);
criterion_main!(benches);
