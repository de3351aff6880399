use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mxkit::{rotate_down_by, rotate_right, rotate_right_by, swap_regions, Dimensions, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIMS: Dimensions = Dimensions {
    rows: 512,
    columns: 512,
};

fn random_bytes(dims: Dimensions) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut buf = vec![0u8; dims.len()];
    rng.fill(&mut buf[..]);
    buf
}

pub fn rotate_rows(c: &mut Criterion) {
    let mut buf = random_bytes(DIMS);

    c.bench_function("rotate_down_by 512x512", |b| {
        b.iter(|| rotate_down_by(&mut buf, DIMS, black_box(37)))
    });
}

pub fn rotate_columns(c: &mut Criterion) {
    let mut buf = random_bytes(DIMS);

    c.bench_function("rotate_right 512x512", |b| {
        b.iter(|| rotate_right(&mut buf, DIMS))
    });
    c.bench_function("rotate_right_by 512x512", |b| {
        b.iter(|| rotate_right_by(&mut buf, DIMS, black_box(-129)))
    });
}

pub fn swap_blocks(c: &mut Criterion) {
    let mut buf = random_bytes(DIMS);
    let delta = Point::new(128, 256);

    c.bench_function("swap_regions 128x256", |b| {
        b.iter(|| {
            swap_regions(
                &mut buf,
                DIMS,
                black_box(Point::new(0, 0)),
                black_box(Point::new(256, 128)),
                delta,
            )
        })
    });
}

criterion_group!(benches, rotate_rows, rotate_columns, swap_blocks);
criterion_main!(benches);
