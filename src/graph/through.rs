use crate::graph::node::{Dispose, GraphNode, RenderCtx};

/*
Serial Chain (Through)
======================

Through connects two nodes in series: the source renders into the block, then
the effect processes that same block in place.

  [Source] ──→ [Effect] ──→ output

Chains nest to the left, so the type of a chain spells out its wiring:

  EnvNode::new()
      .through(PowNode::new(2.0))
      .through(ScaleNode::new(200.0, 2000.0))

  : Through<Through<EnvNode, PowNode>, ScaleNode>

Each stage stays reachable with `source()` / `effect()`, so the node that owns
a chain can hand out its first or last stage as a connection endpoint.

Note events go to both halves (an envelope at the head of a chain still sees
note_on). Disposal runs source first, then effect.
*/

pub struct Through<S, F> {
    source: S,
    effect: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, effect: F) -> Self {
        Self { source, effect }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn effect(&self) -> &F {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut F {
        &mut self.effect
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.effect.render_block(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.source.note_on(ctx);
        self.effect.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.source.note_off(ctx);
        self.effect.note_off(ctx);
    }

    fn is_active(&self) -> bool {
        self.source.is_active() || self.effect.is_active()
    }

    fn get_envelope_level(&self) -> Option<f32> {
        self.source.get_envelope_level()
    }
}

impl<S: Dispose, F: Dispose> Dispose for Through<S, F> {
    fn dispose(&mut self) -> &mut Self {
        self.source.dispose();
        self.effect.dispose();
        self
    }
}
