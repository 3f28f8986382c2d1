//! envscope - play and plot a scaled envelope driving a sine's pitch
//!
//! Run with: cargo run --bin envscope -- [attack decay sustain release]
//!
//! Set ENVSCOPE_LOG=<file> to capture debug logs (stdout belongs to the TUI).

mod app;
mod ui;

use std::{fs::File, sync::Mutex};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use scalenv::{EnvelopeArgs, PartialScaledEnvConfig, ScaledEnvConfig};
use tracing::{info, Level};

use app::Envscope;

const SWEEP_MIN_HZ: f32 = 200.0;
const SWEEP_MAX_HZ: f32 = 2000.0;
const SWEEP_EXPONENT: f32 = 2.0;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let timing = parse_timing(std::env::args().skip(1))?;
    let config = ScaledEnvConfig::resolve(EnvelopeArgs::Positional(timing)).merge(
        PartialScaledEnvConfig::new()
            .range(SWEEP_MIN_HZ, SWEEP_MAX_HZ)
            .exponent(SWEEP_EXPONENT),
    );
    info!(?config, "starting envscope");

    Envscope::new(config).run()
}

fn init_logging() -> EyreResult<()> {
    let Some(path) = std::env::var_os("ENVSCOPE_LOG") else {
        return Ok(());
    };

    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.to_string_lossy()))?;

    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

fn parse_timing(args: impl Iterator<Item = String>) -> EyreResult<Vec<f32>> {
    args.take(4)
        .map(|arg| {
            arg.parse::<f32>()
                .wrap_err_with(|| format!("expected a number of seconds, got {arg:?}"))
        })
        .collect()
}
