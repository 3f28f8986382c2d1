pub mod config; // Construction arguments and defaults
pub mod dsp;
pub mod error;
pub mod graph; // Composable control/audio graph nodes

pub use config::{EnvelopeArgs, PartialScaledEnvConfig, ScaledEnvConfig};
pub use error::{Error, Result};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
