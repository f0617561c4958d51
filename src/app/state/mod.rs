mod constants;
mod overlay;
mod playback;
mod viewport;

use crate::config::AppConfig;
use crate::time_utils::format_progress;
use crate::transport::AudioTransport;
use crate::visual::{DisplayMode, LoadedVisual};
use iced::Task;
use std::time::Duration;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use overlay::OverlayState;
pub(in crate::app) use playback::PlaybackState;
pub(in crate::app) use viewport::ViewportState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) playback: PlaybackState,
    pub(super) overlay: OverlayState,
    pub(super) viewport: ViewportState,
    pub(super) transport: AudioTransport,
    pub(super) visual: LoadedVisual,
    pub(super) config: AppConfig,
}

impl App {
    pub(super) fn bootstrap(
        transport: AudioTransport,
        visual: LoadedVisual,
        mut config: AppConfig,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);

        let mut playback = PlaybackState::new(config.initial_volume, config.initial_speed);
        // Seed the transport with the configured levels and mirror any
        // metadata it already knows.
        transport.set_volume(playback.volume);
        transport.set_speed(playback.speed);
        if let Some(total) = transport.duration() {
            playback.apply_position_report(0.0, total.as_secs_f32());
        }

        let overlay = OverlayState::new(Duration::from_millis(config.controls_hide_delay_ms));
        let app = App {
            playback,
            overlay,
            viewport: ViewportState::new(),
            transport,
            visual,
            config,
        };

        tracing::info!(
            mode = ?app.visual.mode,
            audio_live = app.transport.is_live(),
            hide_delay_ms = app.config.controls_hide_delay_ms,
            "Initialized dialogue screen"
        );
        (app, Task::none())
    }

    pub(super) fn is_image_mode(&self) -> bool {
        self.visual.mode == DisplayMode::Image
    }

    pub(super) fn progress_label(&self) -> String {
        format_progress(self.playback.position, self.playback.duration)
    }
}

fn clamp_config(config: &mut AppConfig) {
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.controls_hide_delay_ms = config
        .controls_hide_delay_ms
        .clamp(MIN_HIDE_DELAY_MS, MAX_HIDE_DELAY_MS);
    if !config.initial_volume.is_finite() {
        config.initial_volume = 1.0;
    }
    config.initial_volume = config.initial_volume.clamp(MIN_VOLUME, MAX_VOLUME);
    if !config.initial_speed.is_finite() {
        config.initial_speed = 1.0;
    }
}

#[cfg(test)]
pub(super) fn test_app(mode: DisplayMode) -> App {
    let (app, _task) = App::bootstrap(
        AudioTransport::inert(),
        LoadedVisual {
            mode,
            handle: None,
            size: None,
            path: std::path::PathBuf::from("test-visual"),
        },
        AppConfig::default(),
    );
    app
}
