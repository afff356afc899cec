//! Benchmarks for noise functions.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::DVec2;
use rhizome_resin_noise::{
    DEFAULT_1D_V1, DEFAULT_2D_V1, DEFAULT_2D_V2, DEFAULT_A, Interpolation,
    gradient_noise_2d_to_1d, random_noise_2d_to_1d, random_noise_2d_to_2d,
    simplex_noise_2d_to_1d, value_noise_2d_to_1d,
};

fn bench_hash(c: &mut Criterion) {
    c.bench_function("random_2d_to_1d", |b| {
        b.iter(|| {
            random_noise_2d_to_1d(
                black_box(DVec2::new(1.234, 5.678)),
                DEFAULT_1D_V1,
                DEFAULT_A,
            )
        })
    });

    c.bench_function("random_2d_to_2d", |b| {
        b.iter(|| {
            random_noise_2d_to_2d(
                black_box(DVec2::new(1.234, 5.678)),
                DEFAULT_2D_V1,
                DEFAULT_2D_V2,
                DEFAULT_A,
            )
        })
    });
}

fn bench_lattice(c: &mut Criterion) {
    c.bench_function("value_cubic", |b| {
        b.iter(|| value_noise_2d_to_1d(black_box(DVec2::new(1.234, 5.678)), Interpolation::Cubic))
    });

    c.bench_function("value_quintic", |b| {
        b.iter(|| {
            value_noise_2d_to_1d(black_box(DVec2::new(1.234, 5.678)), Interpolation::Quintic)
        })
    });

    c.bench_function("gradient_cubic", |b| {
        b.iter(|| {
            gradient_noise_2d_to_1d(black_box(DVec2::new(1.234, 5.678)), Interpolation::Cubic)
        })
    });

    c.bench_function("simplex", |b| {
        b.iter(|| simplex_noise_2d_to_1d(black_box(DVec2::new(1.234, 5.678))))
    });
}

fn bench_frame(c: &mut Criterion) {
    // One 256x256 frame, mapped the way the preview tool maps pixels.
    let size = 256;
    let res = DVec2::splat(size as f64);

    c.bench_function("value_frame_256", |b| {
        b.iter(|| {
            for row in 0..size {
                for column in 0..size {
                    let xy = DVec2::new(row as f64, column as f64) / res * 10.0;
                    black_box(value_noise_2d_to_1d(xy, Interpolation::Cubic));
                }
            }
        })
    });

    c.bench_function("simplex_frame_256", |b| {
        b.iter(|| {
            for row in 0..size {
                for column in 0..size {
                    let xy = DVec2::new(row as f64, column as f64) / res * 10.0;
                    black_box(simplex_noise_2d_to_1d(xy));
                }
            }
        })
    });
}

criterion_group!(benches, bench_hash, bench_lattice, bench_frame);
criterion_main!(benches);
