#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};
use tracing::trace;
#[cfg(feature = "rtrb")]
use tracing::warn;

use crate::{
    dsp::envelope::{Envelope, EnvelopeStage},
    graph::node::{Dispose, GraphNode, RenderCtx},
};
#[cfg(feature = "rtrb")]
use crate::{Error, Result};

/// ADSR generator as a graph node.
///
/// Renders normalized levels in [0, 1]. Optionally paired with an
/// [`EnvelopeHandle`] so another thread can gate it; queued messages are
/// applied at the start of the next block.
pub struct EnvNode {
    env: Envelope,
    #[cfg(feature = "rtrb")]
    rx: Option<Consumer<EnvelopeMessage>>,
}

impl EnvNode {
    pub fn new() -> Self {
        Self::from_envelope(Envelope::new())
    }

    pub fn adsr(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self::from_envelope(Envelope::adsr(attack, decay, sustain, release))
    }

    fn from_envelope(env: Envelope) -> Self {
        Self {
            env,
            #[cfg(feature = "rtrb")]
            rx: None,
        }
    }

    /// Build a node plus a handle for gating it from another thread.
    #[cfg(feature = "rtrb")]
    pub fn with_handle(
        attack: f32,
        decay: f32,
        sustain: f32,
        release: f32,
    ) -> (Self, EnvelopeHandle) {
        let mut node = Self::adsr(attack, decay, sustain, release);
        let handle = node.attach_handle();
        (node, handle)
    }

    /// Open a fresh message queue into this node. Any previous handle is
    /// disconnected.
    #[cfg(feature = "rtrb")]
    pub fn attach_handle(&mut self) -> EnvelopeHandle {
        let (tx, rx) = RingBuffer::<EnvelopeMessage>::new(ENVELOPE_QUEUE_SIZE);
        self.rx = Some(rx);
        EnvelopeHandle { tx }
    }

    /// Trigger, then release automatically after `hold_seconds`.
    pub fn note_on_for(&mut self, hold_seconds: f32, ctx: &RenderCtx) {
        self.env.note_on_for(hold_seconds, ctx);
    }

    pub fn level(&self) -> f32 {
        self.env.level()
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.env.stage()
    }

    pub fn attack(&self) -> f32 {
        self.env.attack()
    }

    pub fn decay(&self) -> f32 {
        self.env.decay()
    }

    pub fn sustain(&self) -> f32 {
        self.env.sustain()
    }

    pub fn release(&self) -> f32 {
        self.env.release()
    }

    pub fn set_attack(&mut self, seconds: f32) {
        self.env.set_attack(seconds);
    }

    pub fn set_decay(&mut self, seconds: f32) {
        self.env.set_decay(seconds);
    }

    pub fn set_sustain(&mut self, level: f32) {
        self.env.set_sustain(level);
    }

    pub fn set_release(&mut self, seconds: f32) {
        self.env.set_release(seconds);
    }

    #[cfg(feature = "rtrb")]
    fn drain_messages(&mut self, ctx: &RenderCtx) {
        let Some(rx) = self.rx.as_mut() else {
            return;
        };

        while let Ok(msg) = rx.pop() {
            match msg {
                EnvelopeMessage::NoteOn => self.env.note_on(ctx),
                EnvelopeMessage::NoteOnFor(hold) => self.env.note_on_for(hold, ctx),
                EnvelopeMessage::NoteOff => self.env.note_off(ctx),
            }
        }
    }
}

impl Default for EnvNode {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphNode for EnvNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        #[cfg(feature = "rtrb")]
        self.drain_messages(ctx);

        self.env.render(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.env.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.env.note_off(ctx);
    }

    fn get_envelope_level(&self) -> Option<f32> {
        Some(self.env.level())
    }

    fn is_active(&self) -> bool {
        self.env.is_active()
    }
}

impl Dispose for EnvNode {
    /// Silence the envelope and close its message queue.
    fn dispose(&mut self) -> &mut Self {
        self.env.reset();
        #[cfg(feature = "rtrb")]
        {
            self.rx = None;
        }
        trace!("envelope generator disposed");
        self
    }
}

#[cfg(feature = "rtrb")]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvelopeMessage {
    NoteOn,
    /// Note on with an automatic release after the given seconds.
    NoteOnFor(f32),
    NoteOff,
}

#[cfg(feature = "rtrb")]
const ENVELOPE_QUEUE_SIZE: usize = 64;

/// Sending side of an envelope's message queue. Lives on the UI or
/// sequencer thread; never blocks.
#[cfg(feature = "rtrb")]
pub struct EnvelopeHandle {
    tx: Producer<EnvelopeMessage>,
}

#[cfg(feature = "rtrb")]
impl EnvelopeHandle {
    pub fn note_on(&mut self) -> Result<()> {
        self.send(EnvelopeMessage::NoteOn)
    }

    pub fn note_on_for(&mut self, hold_seconds: f32) -> Result<()> {
        self.send(EnvelopeMessage::NoteOnFor(hold_seconds))
    }

    pub fn note_off(&mut self) -> Result<()> {
        self.send(EnvelopeMessage::NoteOff)
    }

    /// True once the receiving envelope was disposed or dropped.
    pub fn is_disconnected(&self) -> bool {
        self.tx.is_abandoned()
    }

    fn send(&mut self, msg: EnvelopeMessage) -> Result<()> {
        if self.tx.is_abandoned() {
            warn!(?msg, "envelope message dropped: receiver disposed");
            return Err(Error::Disconnected);
        }

        self.tx.push(msg).map_err(|_| {
            warn!(?msg, "envelope message dropped: queue full");
            Error::QueueFull
        })
    }
}
