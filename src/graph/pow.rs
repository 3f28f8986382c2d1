use tracing::trace;

use crate::{
    dsp::shape::shape_buffer,
    graph::node::{Dispose, GraphNode, Modulatable, RenderCtx},
};

/// Parameters that can be driven on a [`PowNode`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowParam {
    Exponent,
}

/// Raises every incoming sample to a power (see `dsp/shape.rs`).
///
/// Processes the block in place, so it is used as the effect half of a
/// `Through`. The exponent is read on every block; there is no smoothing.
pub struct PowNode {
    exponent: f32,
}

impl PowNode {
    pub fn new(exponent: f32) -> Self {
        Self { exponent }
    }

    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    pub fn set_exponent(&mut self, exponent: f32) {
        self.exponent = exponent;
    }
}

impl Default for PowNode {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl GraphNode for PowNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        shape_buffer(out, self.exponent);
    }
}

impl Modulatable for PowNode {
    type Param = PowParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            PowParam::Exponent => self.exponent,
        }
    }

    fn set_param(&mut self, param: Self::Param, value: f32) {
        match param {
            PowParam::Exponent => self.exponent = value,
        }
    }
}

impl Dispose for PowNode {
    fn dispose(&mut self) -> &mut Self {
        trace!(exponent = self.exponent, "shaper disposed");
        self
    }
}
