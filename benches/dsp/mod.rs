//! Benchmarks for control-signal primitives.

mod envelope;
mod scale;
mod scaled_envelope;
mod shape;

pub use envelope::bench_envelope;
pub use scale::bench_scale;
pub use scaled_envelope::bench_scaled_envelope;
pub use shape::bench_shape;
