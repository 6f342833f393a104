use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fsid::{
    constants::{CCD_COLUMNS, CCD_ROWS, MODULES},
    coordinates::TargetType,
    factories::cal::{self, PixelTimeSeriesType},
    parser, FsId,
};

fn random_pixels(rng: &mut StdRng, samples: usize) -> Vec<FsId> {
    (0..samples)
        .map(|_| {
            let module = MODULES[rng.random_range(0..MODULES.len())];
            cal::get_time_series_fsid(
                PixelTimeSeriesType::SocCal,
                TargetType::LongCadence,
                module,
                rng.random_range(1..=4),
                rng.random_range(0..CCD_ROWS),
                rng.random_range(0..CCD_COLUMNS),
            )
            .unwrap()
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    c.bench_function("cal_pixel/encode", |b| {
        b.iter(|| {
            let id = cal::get_time_series_fsid(
                PixelTimeSeriesType::SocCal,
                TargetType::LongCadence,
                black_box(2),
                black_box(1),
                black_box(50),
                black_box(60),
            );
            black_box(id.ok());
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let ids = random_pixels(&mut rng, 1_000);

    c.bench_function("cal_pixel/parse_1000", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(parser::parse_cal_pixel_fsid(black_box(id)).ok());
            }
        })
    });

    // every key is a foreign family for this parser
    c.bench_function("dr_science_pixel/reject_1000", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(parser::is_dr_science_pixel_fsid(black_box(id)));
            }
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_encode, bench_parse
);
criterion_main!(benches);
