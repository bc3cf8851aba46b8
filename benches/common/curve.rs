use casteljau::sampling::polyline;
use criterion::{black_box, Criterion};
use crate::common::samples::CURVES;

pub fn eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");
    for curve in CURVES.iter() {
        group.bench_function(format!("degree {}", curve.degree()), |b| {
            b.iter(|| black_box(curve.evaluate(black_box(0.5))))
        });
    }
    group.finish();
}

pub fn construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for curve in CURVES.iter() {
        group.bench_function(format!("degree {}", curve.degree()), |b| {
            b.iter(|| black_box(curve.construction(0.5).map(|levels| levels.count())))
        });
    }
    group.finish();
}

pub fn polyline_100(c: &mut Criterion) {
    c.bench_function("polyline", |b| {
        b.iter(|| {
            for curve in CURVES.iter() {
                black_box(polyline(curve, 100)).ok();
            }
        })
    });
}

pub fn all(c: &mut Criterion) {
    eval(c);
    construction(c);
    polyline_100(c);
}
