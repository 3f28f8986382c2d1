//! Benchmarks for the composed scaled envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use scalenv::graph::{GraphNode, NodeExt, OscNode, OscParam, RenderCtx, ScaledEnvNode};
use scalenv::PartialScaledEnvConfig;

use crate::BLOCK_SIZES;

fn sweep() -> ScaledEnvNode {
    ScaledEnvNode::new(
        PartialScaledEnvConfig::new()
            .attack(1.0)
            .range(200.0, 2000.0)
            .exponent(2.0),
    )
}

pub fn bench_scaled_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph/scaled_envelope");
    let ctx = RenderCtx::new(48_000.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut node = sweep();
        node.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("chain", size), &size, |b, _| {
            b.iter(|| {
                node.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        let mut voice = OscNode::sine(200.0).drive(sweep(), OscParam::Frequency);
        voice.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("driving_sine", size), &size, |b, _| {
            b.iter(|| {
                voice.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
