use tracing::trace;

use crate::{
    dsp::scale::scale_buffer,
    graph::node::{Dispose, GraphNode, Modulatable, RenderCtx},
};

/*
Scale Node
==========

Maps a normalized control block into [min, max] in place. Usually the last
stage of a control chain:

  EnvNode ──→ PowNode ──→ ScaleNode ──→ (cutoff, frequency, ...)

  let cutoff = EnvNode::adsr(0.2, 0.3, 0.4, 0.8)
      .through(PowNode::new(2.0))
      .through(ScaleNode::new(200.0, 2000.0));

The node remembers the last sample it wrote so the current control value can
be read without rendering (e.g. by a UI).
*/

/// Parameters that can be driven on a [`ScaleNode`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleParam {
    Min,
    Max,
}

pub struct ScaleNode {
    min: f32,
    max: f32,
    last_value: f32,
}

impl ScaleNode {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            last_value: min,
        }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn set_min(&mut self, min: f32) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: f32) {
        self.max = max;
    }

    /// Last value written by `render_block`, or `min` before the first block.
    pub fn last_value(&self) -> f32 {
        self.last_value
    }
}

impl Default for ScaleNode {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl GraphNode for ScaleNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        scale_buffer(out, self.min, self.max);
        if let Some(&last) = out.last() {
            self.last_value = last;
        }
    }
}

impl Modulatable for ScaleNode {
    type Param = ScaleParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            ScaleParam::Min => self.min,
            ScaleParam::Max => self.max,
        }
    }

    fn set_param(&mut self, param: Self::Param, value: f32) {
        match param {
            ScaleParam::Min => self.min = value,
            ScaleParam::Max => self.max = value,
        }
    }
}

impl Dispose for ScaleNode {
    fn dispose(&mut self) -> &mut Self {
        trace!(min = self.min, max = self.max, "range mapper disposed");
        self
    }
}
