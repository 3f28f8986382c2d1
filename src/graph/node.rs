/// Context passed to graph nodes during rendering
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    /// Audio sample rate (e.g., 48000.0)
    pub sample_rate: f32,
}

impl RenderCtx {
    pub fn new(sample_rate: f32) -> Self {
        Self { sample_rate }
    }
}

/// Nodes with named numeric parameters that other signals can drive.
pub trait Modulatable: Send {
    type Param: Copy + Send;

    /// Current value of `param`.
    fn get_param(&self, param: Self::Param) -> f32;

    /// Overwrite `param`. Nodes apply their own limits, if any.
    fn set_param(&mut self, param: Self::Param, value: f32);
}

/// Core trait for processing graph nodes
///
/// Nodes render blocks in place and respond to note events. Control nodes
/// (envelopes, shapers, range mappers) and audio nodes share this trait, so
/// a control chain can be built with the same combinators as an audio chain.
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Triggered when a note starts
    ///
    /// Default implementation does nothing (passthrough nodes).
    fn note_on(&mut self, _ctx: &RenderCtx) {}

    /// Triggered when a note is released
    ///
    /// Default implementation does nothing (passthrough nodes).
    fn note_off(&mut self, _ctx: &RenderCtx) {}

    fn get_envelope_level(&self) -> Option<f32> {
        None
    }

    /// Check if this node is still producing output
    fn is_active(&self) -> bool {
        true
    }
}

/// Explicit teardown for nodes that hold resources beyond their memory
/// (message queues, scratch buffers, running envelopes).
///
/// Returns the node so calls can be chained. Each implementation must be
/// safe to call more than once; composite nodes call every child exactly once
/// per `dispose` and add no guard of their own.
pub trait Dispose {
    fn dispose(&mut self) -> &mut Self;
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        (**self).note_on(ctx)
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        (**self).note_off(ctx)
    }

    fn get_envelope_level(&self) -> Option<f32> {
        (**self).get_envelope_level()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Passthrough;

    impl GraphNode for Passthrough {
        fn render_block(&mut self, _out: &mut [f32], _ctx: &RenderCtx) {}
    }

    #[test]
    fn ctx_carries_sample_rate() {
        assert_eq!(RenderCtx::new(44_100.0).sample_rate, 44_100.0);
    }

    #[test]
    fn boxed_node_keeps_defaults() {
        let mut node: Box<dyn GraphNode> = Box::new(Passthrough);
        let ctx = RenderCtx::new(48_000.0);
        let mut block = [0.5; 4];

        node.note_on(&ctx);
        node.render_block(&mut block, &ctx);

        assert_eq!(block, [0.5; 4]);
        assert!(node.is_active());
        assert_eq!(node.get_envelope_level(), None);
    }
}
