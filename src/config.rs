//! Construction arguments for scaled envelopes.
//!
//! A scaled envelope can be described two ways: the classic ordered
//! `(attack, decay, sustain, release)` tuple, or a partial record naming only
//! the fields the caller cares about. Both resolve through
//! [`ScaledEnvConfig::resolve`] against the same defaults, so
//! `[0.2, 0.1, 0.5, 1.0]` and `{attack: 0.2, decay: 0.1, sustain: 0.5,
//! release: 1.0}` produce identical configurations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::envelope::{DEFAULT_ATTACK, DEFAULT_DECAY, DEFAULT_RELEASE, DEFAULT_SUSTAIN};

/// Fully resolved configuration for a [`ScaledEnvNode`](crate::graph::ScaledEnvNode).
///
/// Timing fields are in seconds except `sustain`, which is a level (0.0 - 1.0).
/// `min` may be greater than `max`; that simply inverts the mapping.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledEnvConfig {
    pub attack: f32,
    pub decay: f32,
    pub sustain: f32,
    pub release: f32,
    pub min: f32,
    pub max: f32,
    pub exponent: f32,
}

impl Default for ScaledEnvConfig {
    fn default() -> Self {
        Self {
            attack: DEFAULT_ATTACK,
            decay: DEFAULT_DECAY,
            sustain: DEFAULT_SUSTAIN,
            release: DEFAULT_RELEASE,
            min: 0.0,
            max: 1.0,
            exponent: 1.0, // identity shaping
        }
    }
}

/// Caller-supplied subset of a [`ScaledEnvConfig`].
///
/// With the `serde` feature this deserializes from any self-describing format;
/// missing keys stay `None` and unknown keys are ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialScaledEnvConfig {
    pub attack: Option<f32>,
    pub decay: Option<f32>,
    pub sustain: Option<f32>,
    pub release: Option<f32>,
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub exponent: Option<f32>,
}

impl PartialScaledEnvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attack(mut self, seconds: f32) -> Self {
        self.attack = Some(seconds);
        self
    }

    pub fn decay(mut self, seconds: f32) -> Self {
        self.decay = Some(seconds);
        self
    }

    pub fn sustain(mut self, level: f32) -> Self {
        self.sustain = Some(level);
        self
    }

    pub fn release(mut self, seconds: f32) -> Self {
        self.release = Some(seconds);
        self
    }

    pub fn min(mut self, min: f32) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f32) -> Self {
        self.max = Some(max);
        self
    }

    /// Set both ends of the output range at once.
    pub fn range(self, min: f32, max: f32) -> Self {
        self.min(min).max(max)
    }

    pub fn exponent(mut self, exponent: f32) -> Self {
        self.exponent = Some(exponent);
        self
    }
}

/// The two supported construction call shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopeArgs {
    /// Ordered `[attack, decay, sustain, release]`. Missing trailing values keep
    /// their default, extra values are ignored.
    Positional(Vec<f32>),
    /// Named fields; anything left `None` keeps its default.
    Partial(PartialScaledEnvConfig),
}

impl Default for EnvelopeArgs {
    fn default() -> Self {
        EnvelopeArgs::Partial(PartialScaledEnvConfig::default())
    }
}

impl From<[f32; 4]> for EnvelopeArgs {
    fn from(adsr: [f32; 4]) -> Self {
        EnvelopeArgs::Positional(adsr.to_vec())
    }
}

impl From<(f32, f32, f32, f32)> for EnvelopeArgs {
    fn from((attack, decay, sustain, release): (f32, f32, f32, f32)) -> Self {
        EnvelopeArgs::Positional(vec![attack, decay, sustain, release])
    }
}

impl From<Vec<f32>> for EnvelopeArgs {
    fn from(values: Vec<f32>) -> Self {
        EnvelopeArgs::Positional(values)
    }
}

impl From<PartialScaledEnvConfig> for EnvelopeArgs {
    fn from(partial: PartialScaledEnvConfig) -> Self {
        EnvelopeArgs::Partial(partial)
    }
}

impl EnvelopeArgs {
    /// Normalize either call shape into a partial record.
    fn into_partial(self) -> PartialScaledEnvConfig {
        match self {
            EnvelopeArgs::Partial(partial) => partial,
            EnvelopeArgs::Positional(values) => {
                let mut ordered = values.into_iter();
                PartialScaledEnvConfig {
                    attack: ordered.next(),
                    decay: ordered.next(),
                    sustain: ordered.next(),
                    release: ordered.next(),
                    ..PartialScaledEnvConfig::default()
                }
            }
        }
    }
}

impl ScaledEnvConfig {
    /// Merge caller-supplied values over the defaults.
    pub fn resolve(args: impl Into<EnvelopeArgs>) -> Self {
        Self::default().merge(args.into().into_partial())
    }

    /// Overwrite every field present in `partial`, keep the rest.
    pub fn merge(self, partial: PartialScaledEnvConfig) -> Self {
        Self {
            attack: partial.attack.unwrap_or(self.attack),
            decay: partial.decay.unwrap_or(self.decay),
            sustain: partial.sustain.unwrap_or(self.sustain),
            release: partial.release.unwrap_or(self.release),
            min: partial.min.unwrap_or(self.min),
            max: partial.max.unwrap_or(self.max),
            exponent: partial.exponent.unwrap_or(self.exponent),
        }
    }
}
