use tracing::debug;

#[cfg(feature = "rtrb")]
use crate::graph::envelope::EnvelopeHandle;
use crate::{
    config::{EnvelopeArgs, ScaledEnvConfig},
    dsp::envelope::EnvelopeStage,
    graph::{
        envelope::EnvNode,
        extensions::NodeExt,
        node::{Dispose, GraphNode, Modulatable, RenderCtx},
        pow::PowNode,
        scale::ScaleNode,
        through::Through,
    },
};

/*
Scaled Envelope
===============

An ADSR envelope that can drive any parameter, not just amplitude. Three
stages in series:

  [EnvNode] ──→ [PowNode] ──→ [ScaleNode] ──→ output
   0 .. 1        x^exponent    min + x·(max - min)
                 ▲ input                    ▲ output

  level:    0.0   0.25   0.5   0.75   1.0
  e = 1:    200    650  1100   1550  2000     (min 200, max 2000)
  e = 2:    200  312.5   650 1212.5  2000

The generator's level is normalized, the shaper bends it, the mapper puts it
in the target's units. Because the chain is a plain `Through` value the
wiring is fixed at construction: `input()` is always the shaper and
`output()` is always the mapper.

Endpoints
---------

  input()   The shaper. `process_input` pushes an external block through
            shaper and mapper without the generator, which is how a second
            control source (or a test) reaches the curve directly.

  output()  The mapper. `value()` reads the last sample it produced;
            `render_block` (or a `Drive` node) consumes whole blocks.

Parameters
----------

min, max and exponent are not stored here. The accessors read and write the
owning stage, so a change lands on the very next rendered sample. Nothing is
validated: a reversed range (min > max) inverts the sweep, and any other value
is the caller's responsibility.

Disposal
--------

`dispose` tears down the generator, then the shaper, then the mapper, each
unconditionally, and hands the node back for chaining. Stages are individually
safe to dispose twice; this node does not track whether it was disposed.
*/

type Chain = Through<Through<EnvNode, PowNode>, ScaleNode>;

/// Parameters that can be driven on a [`ScaledEnvNode`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaledEnvParam {
    Min,
    Max,
    Exponent,
}

pub struct ScaledEnvNode {
    chain: Chain,
    config: ScaledEnvConfig,
}

impl ScaledEnvNode {
    /// Build from either call shape:
    ///
    /// ```ignore
    /// ScaledEnvNode::new([0.2_f32, 0.1, 0.5, 1.0]);
    /// ScaledEnvNode::new(PartialScaledEnvConfig::new().attack(0.2).range(200.0, 2000.0));
    /// ```
    pub fn new(args: impl Into<EnvelopeArgs>) -> Self {
        Self::from_config(ScaledEnvConfig::resolve(args))
    }

    /// Positional shorthand with the default range and curve.
    pub fn adsr(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self::new([attack, decay, sustain, release])
    }

    pub fn from_config(config: ScaledEnvConfig) -> Self {
        let generator = EnvNode::adsr(config.attack, config.decay, config.sustain, config.release);
        let chain = generator
            .pow(config.exponent)
            .scale(config.min, config.max);

        debug!(?config, "scaled envelope created");

        Self { chain, config }
    }

    /// Build a node plus a handle for triggering it from another thread.
    #[cfg(feature = "rtrb")]
    pub fn with_handle(args: impl Into<EnvelopeArgs>) -> (Self, EnvelopeHandle) {
        let mut node = Self::new(args);
        let handle = node.generator_mut().attach_handle();
        (node, handle)
    }

    /// The configuration this node was built from. Later parameter writes are
    /// not reflected here; use the accessors for live values.
    pub fn config(&self) -> &ScaledEnvConfig {
        &self.config
    }

    pub fn generator(&self) -> &EnvNode {
        self.chain.source().source()
    }

    pub fn generator_mut(&mut self) -> &mut EnvNode {
        self.chain.source_mut().source_mut()
    }

    /// Input endpoint: the shaper.
    pub fn input(&self) -> &PowNode {
        self.chain.source().effect()
    }

    pub fn input_mut(&mut self) -> &mut PowNode {
        self.chain.source_mut().effect_mut()
    }

    /// Output endpoint: the range mapper.
    pub fn output(&self) -> &ScaleNode {
        self.chain.effect()
    }

    pub fn output_mut(&mut self) -> &mut ScaleNode {
        self.chain.effect_mut()
    }

    /// Push an external block through shaper and mapper, bypassing the
    /// generator. The block is processed in place.
    pub fn process_input(&mut self, block: &mut [f32], ctx: &RenderCtx) {
        self.input_mut().render_block(block, ctx);
        self.output_mut().render_block(block, ctx);
    }

    /// Last value produced at the output.
    pub fn value(&self) -> f32 {
        self.output().last_value()
    }

    pub fn min(&self) -> f32 {
        self.output().min()
    }

    pub fn set_min(&mut self, min: f32) {
        self.output_mut().set_min(min);
    }

    pub fn max(&self) -> f32 {
        self.output().max()
    }

    pub fn set_max(&mut self, max: f32) {
        self.output_mut().set_max(max);
    }

    pub fn exponent(&self) -> f32 {
        self.input().exponent()
    }

    pub fn set_exponent(&mut self, exponent: f32) {
        self.input_mut().set_exponent(exponent);
    }

    pub fn attack(&self) -> f32 {
        self.generator().attack()
    }

    pub fn set_attack(&mut self, seconds: f32) {
        self.generator_mut().set_attack(seconds);
    }

    pub fn decay(&self) -> f32 {
        self.generator().decay()
    }

    pub fn set_decay(&mut self, seconds: f32) {
        self.generator_mut().set_decay(seconds);
    }

    pub fn sustain(&self) -> f32 {
        self.generator().sustain()
    }

    pub fn set_sustain(&mut self, level: f32) {
        self.generator_mut().set_sustain(level);
    }

    pub fn release(&self) -> f32 {
        self.generator().release()
    }

    pub fn set_release(&mut self, seconds: f32) {
        self.generator_mut().set_release(seconds);
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.generator().stage()
    }

    pub fn trigger_attack(&mut self, ctx: &RenderCtx) {
        self.generator_mut().note_on(ctx);
    }

    pub fn trigger_release(&mut self, ctx: &RenderCtx) {
        self.generator_mut().note_off(ctx);
    }

    /// Attack now, release after `hold_seconds` worth of rendered samples.
    pub fn trigger_attack_release(&mut self, hold_seconds: f32, ctx: &RenderCtx) {
        self.generator_mut().note_on_for(hold_seconds, ctx);
    }
}

impl GraphNode for ScaledEnvNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.chain.render_block(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.chain.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.chain.note_off(ctx);
    }

    fn get_envelope_level(&self) -> Option<f32> {
        self.generator().get_envelope_level()
    }

    // Shaper and mapper are always "active"; only the generator has a tail.
    fn is_active(&self) -> bool {
        self.generator().is_active()
    }
}

impl Modulatable for ScaledEnvNode {
    type Param = ScaledEnvParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            ScaledEnvParam::Min => self.min(),
            ScaledEnvParam::Max => self.max(),
            ScaledEnvParam::Exponent => self.exponent(),
        }
    }

    fn set_param(&mut self, param: Self::Param, value: f32) {
        match param {
            ScaledEnvParam::Min => self.set_min(value),
            ScaledEnvParam::Max => self.set_max(value),
            ScaledEnvParam::Exponent => self.set_exponent(value),
        }
    }
}

impl Dispose for ScaledEnvNode {
    fn dispose(&mut self) -> &mut Self {
        // Through disposes source before effect: generator, shaper, mapper.
        self.chain.dispose();
        debug!("scaled envelope disposed");
        self
    }
}
