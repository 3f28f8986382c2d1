//! Audio setup and the realtime render callback

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, RingBuffer};
use tracing::{debug, error, info};

use scalenv::{
    graph::{Drive, GraphNode, NodeExt, OscNode, OscParam, RenderCtx, ScaledEnvNode},
    ScaledEnvConfig,
};

use super::ui::ScopeApp;

/// Samples per control update. Smaller than a typical device buffer so the
/// pitch sweep is updated several times per callback.
const CONTROL_BLOCK: usize = 128;
const OUTPUT_GAIN: f32 = 0.2;
const QUEUE_SIZE: usize = 64;
const SCOPE_QUEUE_SIZE: usize = 4096;

/// Commands sent from the UI thread to the audio thread
#[derive(Clone, Copy, Debug)]
pub enum ControlMessage {
    SetExponent(f32),
    SetRange { min: f32, max: f32 },
}

pub struct Envscope {
    config: ScaledEnvConfig,
}

impl Envscope {
    pub fn new(config: ScaledEnvConfig) -> Self {
        Self { config }
    }

    /// Open the default output device, start playback and hand the terminal
    /// to the UI until the user quits.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let stream_config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = stream_config.sample_rate().0 as f32;
        let channels = stream_config.channels() as usize;
        info!(sample_rate, channels, "audio device opened");

        let mut sweep = ScaledEnvNode::from_config(self.config);
        let envelope = sweep.generator_mut().attach_handle();
        let voice = OscNode::sine(self.config.min).drive(sweep, OscParam::Frequency);

        let (control_tx, control_rx) = RingBuffer::<ControlMessage>::new(QUEUE_SIZE);
        let (scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_QUEUE_SIZE);

        let mut renderer = Renderer {
            voice,
            control_rx,
            scope_tx,
            ctx: RenderCtx::new(sample_rate),
            block: vec![0.0; CONTROL_BLOCK],
        };

        let stream = device
            .build_output_stream(
                &stream_config.into(),
                move |data: &mut [f32], _| renderer.fill(data, channels),
                |err| error!(%err, "audio stream error"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;

        let mut ui = ScopeApp::new(envelope, control_tx, scope_rx, self.config);
        let mut terminal = ratatui::init();
        let result = ui.run(&mut terminal);
        ratatui::restore();

        debug!("envscope exiting");
        result
    }
}

/// State owned by the audio callback. Nothing here locks or allocates.
struct Renderer {
    voice: Drive<OscNode, ScaledEnvNode>,
    control_rx: Consumer<ControlMessage>,
    scope_tx: Producer<f32>,
    ctx: RenderCtx,
    block: Vec<f32>,
}

impl Renderer {
    fn fill(&mut self, data: &mut [f32], channels: usize) {
        while let Ok(msg) = self.control_rx.pop() {
            let sweep = self.voice.control_mut();
            match msg {
                ControlMessage::SetExponent(exponent) => sweep.set_exponent(exponent),
                ControlMessage::SetRange { min, max } => {
                    sweep.set_min(min);
                    sweep.set_max(max);
                }
            }
        }

        for frame_chunk in data.chunks_mut(CONTROL_BLOCK * channels) {
            let frames = frame_chunk.len() / channels;
            let block = &mut self.block[..frames];
            block.fill(0.0);
            self.voice.render_block(block, &self.ctx);

            for (frame, &sample) in frame_chunk.chunks_mut(channels).zip(block.iter()) {
                frame.fill(sample * OUTPUT_GAIN);
            }

            // The UI only needs one point per control block; drop it if the UI
            // is behind.
            let _ = self.scope_tx.push(self.voice.control().value());
        }
    }
}
