use crate::{
    dsp::drive::block_average,
    graph::node::{GraphNode, Modulatable, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Drive Node
==========

Connects a control source to a parameter on another node. The control's
block average is written to the parameter before the target renders, so the
control must already produce values in the parameter's units. A scaled
envelope does exactly that:

  // Pitch sweep 200 Hz → 2000 Hz on attack, back down on release
  let sweep = ScaledEnvNode::new(
      PartialScaledEnvConfig::new().attack(0.2).range(200.0, 2000.0),
  );
  let voice = OscNode::sine(200.0).drive(sweep, OscParam::Frequency);

  // Cutoff-style curve: exponent 2 spends more time at the low end
  let curve = ScaledEnvNode::new(
      PartialScaledEnvConfig::new().range(200.0, 2000.0).exponent(2.0),
  );

See `dsp/drive.rs` for the block-rate tradeoff.
*/

pub struct Drive<T, C>
where
    T: GraphNode + Modulatable,
    C: GraphNode,
{
    target: T,
    control: C,
    param: T::Param,
    control_buffer: Vec<f32>,
}

impl<T, C> Drive<T, C>
where
    T: GraphNode + Modulatable,
    C: GraphNode,
{
    pub fn new(target: T, control: C, param: T::Param) -> Self {
        Self {
            target,
            control,
            param,
            control_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }
}

impl<T, C> GraphNode for Drive<T, C>
where
    T: GraphNode + Modulatable,
    C: GraphNode,
{
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        // Oversized blocks are split so the control advances in step with the target.
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            let control = &mut self.control_buffer[..chunk.len()];
            control.fill(0.0);
            self.control.render_block(control, ctx);

            self.target.set_param(self.param, block_average(control));
            self.target.render_block(chunk, ctx);
        }
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.target.note_on(ctx);
        self.control.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.target.note_off(ctx);
        self.control.note_off(ctx);
    }

    fn is_active(&self) -> bool {
        self.target.is_active()
    }

    fn get_envelope_level(&self) -> Option<f32> {
        self.control.get_envelope_level()
    }
}
