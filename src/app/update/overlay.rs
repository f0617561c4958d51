use super::super::state::App;
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_overlay_hover_changed(&mut self, hovering: bool) {
        self.overlay.set_hovering(Instant::now(), hovering);
    }

    pub(super) fn handle_overlay_tick(&mut self, now: Instant) {
        if self.overlay.tick(now) {
            debug!("Hiding playback controls after idle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::test_app;
    use crate::visual::DisplayMode;
    use iced::Point;
    use std::time::{Duration, Instant};

    #[test]
    fn overlay_hides_after_the_configured_delay() {
        let mut app = test_app(DisplayMode::Document);
        let _ = app.update(Message::PointerMoved(Point::new(1.0, 1.0)));
        assert!(app.overlay.visible);

        // Default delay is 4000 ms; well past it the tick hides the panel.
        let late = Instant::now() + Duration::from_secs(10);
        let _ = app.update(Message::OverlayTick(late));
        assert!(!app.overlay.visible);
        assert!(!app.overlay.hide_pending());
    }

    #[test]
    fn hovering_the_panel_suppresses_the_hide() {
        let mut app = test_app(DisplayMode::Document);
        let _ = app.update(Message::PointerMoved(Point::new(1.0, 1.0)));
        let _ = app.update(Message::OverlayHoverChanged(true));

        let late = Instant::now() + Duration::from_secs(10);
        let _ = app.update(Message::OverlayTick(late));
        assert!(app.overlay.visible);

        // Leaving re-arms; the overlay eventually hides on its own.
        let _ = app.update(Message::OverlayHoverChanged(false));
        assert!(app.overlay.hide_pending());
        let later = Instant::now() + Duration::from_secs(20);
        let _ = app.update(Message::OverlayTick(later));
        assert!(!app.overlay.visible);
    }
}
