//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free and realtime-safe. They only do the
//! per-sample math; the graph layer adds note events, parameters and wiring.

/// Block-rate helpers for writing control values into parameters.
pub mod drive;
/// Attack/decay/sustain/release envelope generator.
pub mod envelope;
/// Sine oscillator used as a drivable audio target.
pub mod oscillator;
/// Affine mapping of normalized values into an arbitrary range.
pub mod scale;
/// Power-law shaping of normalized values.
pub mod shape;

pub use envelope::EnvelopeStage;
