use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use fsid::time_series::{reconstruct::reconstruct, SparseRecord};

const SERIES: &str = "/cal/pixels/SocCal/lct/2/1/50:60";

/// One quarter of long cadences, with a fraction of the cadences gapped.
fn quarter(rng: &mut StdRng, gap_fraction: f64) -> Vec<SparseRecord<&'static str, f32>> {
    let mut records = Vec::with_capacity(4500);
    for cadence in 0..4500 {
        if !rng.random_bool(gap_fraction) {
            records.push(SparseRecord::new(SERIES, cadence, rng.random::<f32>(), 7));
        }
    }
    records.shuffle(rng);
    records
}

fn bench_dense(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    c.bench_function("reconstruct/quarter_5pct_gaps", |b| {
        b.iter_batched(
            || quarter(&mut rng, 0.05),
            |records| {
                let series = reconstruct(black_box(records), 0, 4499, SERIES).unwrap();
                black_box(series);
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_sparse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    c.bench_function("reconstruct/quarter_90pct_gaps", |b| {
        b.iter_batched(
            || quarter(&mut rng, 0.9),
            |records| {
                let series = reconstruct(black_box(records), 0, 4499, SERIES).unwrap();
                black_box(series);
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_dense, bench_sparse
);
criterion_main!(benches);
