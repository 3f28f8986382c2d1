//! Benchmarks for power-law shaping.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use scalenv::dsp::shape;

use crate::BLOCK_SIZES;

pub fn bench_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/shape");

    for &size in BLOCK_SIZES {
        let ramp: Vec<f32> = (0..size).map(|i| i as f32 / size as f32).collect();
        let mut buffer = ramp.clone();

        for &(name, exponent) in &[("identity", 1.0), ("square", 2.0), ("fractional", 0.37)] {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&ramp);
                    shape::shape_buffer(black_box(&mut buffer), black_box(exponent));
                })
            });
        }
    }

    group.finish();
}
