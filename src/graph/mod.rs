//! Composable building blocks for control and audio graphs.
//!
//! Graph nodes wrap the low-level DSP primitives with note events, drivable
//! parameters and block-based rendering. The `extensions` module adds fluent
//! helpers so chains read left to right.

/// Write a control signal into another node's parameter.
pub mod drive;
/// Envelope generator node exposing ADSR state.
pub mod envelope;
/// Fluent combinators (`.through()`, `.pow()`, `.scale()`, `.drive()`).
pub mod extensions;
/// Core traits shared by all graph nodes.
pub mod node;
/// Sine oscillator with a drivable frequency.
pub mod oscillator;
/// Power-law shaping stage.
pub mod pow;
/// Affine range mapping stage.
pub mod scale;
/// Envelope → shaper → range mapper, as one node.
pub mod scaled_envelope;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use drive::Drive;
#[cfg(feature = "rtrb")]
pub use envelope::EnvelopeHandle;
pub use envelope::EnvNode;
pub use extensions::NodeExt;
pub use node::{Dispose, GraphNode, Modulatable, RenderCtx};
pub use oscillator::{OscNode, OscParam};
pub use pow::{PowNode, PowParam};
pub use scale::{ScaleNode, ScaleParam};
pub use scaled_envelope::{ScaledEnvNode, ScaledEnvParam};
pub use through::Through;
