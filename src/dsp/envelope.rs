use crate::{graph::node::RenderCtx, MIN_TIME};

/*
ADSR Control Envelope
=====================

The envelope is the base control source for every scaled envelope in this
crate. It always produces a NORMALIZED level in [0.0, 1.0]; the shaping and
range mapping happen downstream (see `graph/scaled_envelope.rs`), so the
generator itself never needs to know whether it ends up driving an amplitude,
a cutoff in Hz or a detune in cents.

Vocabulary
----------

  level       Current output value, 0.0 to 1.0.

  stage       Idle, Attack, Decay, Sustain or Release.

  gate        note_on raises the gate (Attack), note_off lowers it (Release
              from wherever the level currently is).

  hold        Optional countdown in samples armed by `note_on_for`. When it
              runs out the envelope releases itself, which gives a
              trigger-and-release-after-N-seconds call without a scheduler.


Shape
-----

    1.0 ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
        │  ╱                 ╲
    0.0 └─╱───────────────────╲──→ t
           A    D      S       R

Segments are linear. A curved response is obtained by raising the level to a
power afterwards (PowNode), which keeps this state machine trivial and lets the
curve be changed while a note is sounding.


Per-sample increments
---------------------

    attack:  level += 1 / (attack_time * sample_rate)
    decay:   level -= (1 - sustain) / (decay_time * sample_rate)
    release: level  = start * (1 - elapsed / total)

Release snapshots its start level and sample count at note_off so it lands on
exactly 0.0 regardless of where in the attack or decay it began.
*/

/// Default attack time in seconds.
pub const DEFAULT_ATTACK: f32 = 0.01;
/// Default decay time in seconds.
pub const DEFAULT_DECAY: f32 = 0.1;
/// Default sustain level.
pub const DEFAULT_SUSTAIN: f32 = 0.7;
/// Default release time in seconds.
pub const DEFAULT_RELEASE: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
}

pub struct Envelope {
    attack_time: f32,
    decay_time: f32,
    sustain_level: f32,
    release_time: f32,

    stage: EnvelopeStage,
    level: f32,

    decay_start_level: f32,

    release_start_level: f32,
    release_total_samples: u32,
    release_elapsed_samples: u32,

    // Samples left before an automatic note_off (see `note_on_for`)
    hold_remaining: Option<u32>,
}

impl Envelope {
    pub fn new() -> Self {
        Self::adsr(DEFAULT_ATTACK, DEFAULT_DECAY, DEFAULT_SUSTAIN, DEFAULT_RELEASE)
    }

    pub fn adsr(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack_time: attack.max(MIN_TIME),
            decay_time: decay.max(MIN_TIME),
            sustain_level: sustain.clamp(0.0, 1.0),
            release_time: release.max(MIN_TIME),

            stage: EnvelopeStage::Idle,
            level: 0.0,
            decay_start_level: 0.0,
            release_start_level: 0.0,
            release_total_samples: 1,
            release_elapsed_samples: 0,
            hold_remaining: None,
        }
    }

    /// Gate high: attack from the current level, so a retrigger never jumps
    /// back to zero.
    pub fn note_on(&mut self, _ctx: &RenderCtx) {
        self.stage = EnvelopeStage::Attack;
        self.release_elapsed_samples = 0;
        self.hold_remaining = None;
    }

    /// Gate high, then release automatically after `hold_seconds` of rendered
    /// samples.
    pub fn note_on_for(&mut self, hold_seconds: f32, ctx: &RenderCtx) {
        self.note_on(ctx);
        let samples = (hold_seconds.max(0.0) * ctx.sample_rate).round() as u32;
        self.hold_remaining = Some(samples);
    }

    /// Gate low: release from the current level.
    pub fn note_off(&mut self, ctx: &RenderCtx) {
        self.hold_remaining = None;

        if matches!(self.stage, EnvelopeStage::Idle) {
            return;
        }

        self.release_start_level = self.level;
        self.release_total_samples = (self.release_time * ctx.sample_rate).round().max(1.0) as u32;
        self.release_elapsed_samples = 0;
        self.stage = EnvelopeStage::Release;
    }

    /// Advance by one sample.
    pub fn next_sample(&mut self, ctx: &RenderCtx) {
        if let Some(remaining) = self.hold_remaining {
            if remaining == 0 {
                self.note_off(ctx);
            } else {
                self.hold_remaining = Some(remaining - 1);
            }
        }

        match self.stage {
            EnvelopeStage::Idle => {
                self.level = 0.0;
            }

            EnvelopeStage::Attack => {
                self.level += 1.0 / (self.attack_time * ctx.sample_rate);

                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.decay_start_level = 1.0;
                    self.stage = EnvelopeStage::Decay;
                }
            }

            EnvelopeStage::Decay => {
                let target = self.sustain_level;
                let total_drop = self.decay_start_level - target;
                self.level -= total_drop / (self.decay_time * ctx.sample_rate);

                if self.level <= target {
                    self.level = target;
                    self.stage = EnvelopeStage::Sustain;
                }
            }

            EnvelopeStage::Sustain => {
                self.level = self.sustain_level;
            }

            EnvelopeStage::Release => {
                let progress =
                    self.release_elapsed_samples as f32 / self.release_total_samples as f32;
                self.level = (self.release_start_level * (1.0 - progress)).max(0.0);

                self.release_elapsed_samples = self.release_elapsed_samples.saturating_add(1);

                if self.release_elapsed_samples >= self.release_total_samples {
                    self.level = 0.0;
                    self.stage = EnvelopeStage::Idle;
                }
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.level));
    }

    /// Render a block of levels.
    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        for sample in buffer.iter_mut() {
            self.next_sample(ctx);
            *sample = self.level;
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.stage, EnvelopeStage::Idle)
    }

    /// Drop back to idle immediately, cancelling any pending hold.
    pub fn reset(&mut self) {
        self.stage = EnvelopeStage::Idle;
        self.level = 0.0;
        self.decay_start_level = 0.0;
        self.release_elapsed_samples = 0;
        self.release_start_level = 0.0;
        self.hold_remaining = None;
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    pub fn attack(&self) -> f32 {
        self.attack_time
    }

    pub fn decay(&self) -> f32 {
        self.decay_time
    }

    pub fn sustain(&self) -> f32 {
        self.sustain_level
    }

    pub fn release(&self) -> f32 {
        self.release_time
    }

    // Setters apply the same floors as `adsr`. A change to release_time only
    // affects the next note_off; a release already in flight keeps its length.

    pub fn set_attack(&mut self, seconds: f32) {
        self.attack_time = seconds.max(MIN_TIME);
    }

    pub fn set_decay(&mut self, seconds: f32) {
        self.decay_time = seconds.max(MIN_TIME);
    }

    pub fn set_sustain(&mut self, level: f32) {
        self.sustain_level = level.clamp(0.0, 1.0);
    }

    pub fn set_release(&mut self, seconds: f32) {
        self.release_time = seconds.max(MIN_TIME);
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}
