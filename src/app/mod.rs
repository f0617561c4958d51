mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::transport::AudioTransport;
use crate::visual::LoadedVisual;
use iced::{Size, window};

/// Helper to launch the app with the provided resources.
pub fn run_app(
    transport: AudioTransport,
    visual: LoadedVisual,
    config: AppConfig,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Dialogue Viewer", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| crate::theme::Theme::from(app.config.theme).into())
        .run_with(move || App::bootstrap(transport, visual, config))
}
