use crate::dsp::oscillator::SineOscillator;
use crate::graph::node::{GraphNode, Modulatable, RenderCtx};

/*
Sine Oscillator Node
====================

A fixed-frequency sine source whose frequency is a drivable parameter. It does
not track note pitch: the point is to hear (and test) a control signal moving
the frequency.

  let voice = OscNode::sine(200.0)
      .drive(ScaledEnvNode::adsr(0.2, 0.3, 0.5, 1.0), OscParam::Frequency);
*/

/// Parameters that can be driven on an oscillator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OscParam {
    /// Oscillator frequency in Hz
    Frequency,
}

pub struct OscNode {
    osc: SineOscillator,
    frequency: f32,
}

impl OscNode {
    pub fn sine(frequency: f32) -> Self {
        Self {
            osc: SineOscillator::new(),
            frequency: clamp_frequency(frequency),
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}

// Audible band; also keeps a runaway control from producing NaN phases.
fn clamp_frequency(frequency: f32) -> f32 {
    frequency.clamp(20.0, 20_000.0)
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.osc.render(out, self.frequency, ctx.sample_rate);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.osc.reset();
    }
}

impl Modulatable for OscNode {
    type Param = OscParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            OscParam::Frequency => self.frequency,
        }
    }

    fn set_param(&mut self, param: Self::Param, value: f32) {
        match param {
            OscParam::Frequency => self.frequency = clamp_frequency(value),
        }
    }
}
