#[macro_use]
extern crate criterion;
extern crate mathutil;

use criterion::{black_box, Criterion};
use mathutil::{rational_approximation, rational_approximation_farey};

const INPUT: [(f64, f64); 3] = [
    (std::f64::consts::PI, 0.001),
    (0.65, 0.1),
    (123.456789, 1.),
];

fn bench_continued_fraction(c: &mut Criterion) {
    c.bench_function("continued_fraction_approx", |b| {
        b.iter(|| {
            for (v, accuracy) in INPUT.iter() {
                let _ = rational_approximation(black_box(*v), black_box(*accuracy));
            }
        })
    });
}

fn bench_farey(c: &mut Criterion) {
    c.bench_function("farey_approx", |b| {
        b.iter(|| {
            for (v, accuracy) in INPUT.iter() {
                let _ = rational_approximation_farey(black_box(*v), black_box(*accuracy));
            }
        })
    });
}

criterion_group!(approx_benches, bench_continued_fraction, bench_farey);
criterion_main!(approx_benches);
