//! Benchmarks for affine range mapping.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use scalenv::dsp::scale;

use crate::BLOCK_SIZES;

pub fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/scale");

    for &size in BLOCK_SIZES {
        let ramp: Vec<f32> = (0..size).map(|i| i as f32 / size as f32).collect();
        let mut buffer = ramp.clone();

        group.bench_with_input(BenchmarkId::new("scale_buffer", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&ramp);
                scale::scale_buffer(black_box(&mut buffer), black_box(200.0), black_box(2000.0));
            })
        });
    }

    group.finish();
}
