//! Entry point for the dialogue viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments (audio track + visual resource).
//! - Load user configuration from `conf/config.toml`.
//! - Open the audio transport and classify/load the visual.
//! - Launch the GUI application.

mod app;
mod config;
mod theme;
mod time_utils;
mod transport;
mod visual;

use crate::app::run_app;
use crate::config::load_config;
use crate::transport::AudioTransport;
use crate::visual::load_visual;
use anyhow::{Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let (audio_path, visual_path) = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        audio = %audio_path.display(),
        visual = %visual_path.display(),
        level = %config.log_level,
        "Starting dialogue viewer"
    );

    let visual = load_visual(&visual_path);
    let transport = AudioTransport::open(&audio_path);
    run_app(transport, visual, config).map_err(|err| anyhow!("Failed to start the GUI: {err}"))?;
    Ok(())
}

fn parse_args() -> Result<(PathBuf, PathBuf)> {
    let mut args = env::args().skip(1);
    let audio = args
        .next()
        .ok_or_else(|| anyhow!("Usage: dialog-viewer <audio-file> <visual-file>"))?;
    let visual = args
        .next()
        .ok_or_else(|| anyhow!("Usage: dialog-viewer <audio-file> <visual-file>"))?;

    let audio = PathBuf::from(audio);
    let visual = PathBuf::from(visual);
    // Missing assets are tolerated (the screen still mounts with inert
    // controls), so only warn here.
    if !audio.exists() {
        warn!(path = %audio.display(), "Audio file not found; playback controls will be inert");
    }
    if !visual.exists() {
        warn!(path = %visual.display(), "Visual file not found; showing fallback");
    }
    Ok((audio, visual))
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    }
}
