use super::super::state::App;
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_zoom_in(&mut self) {
        self.viewport.zoom_in(Instant::now());
        debug!(zoom = self.viewport.zoom, "Zoomed in");
    }

    pub(super) fn handle_zoom_out(&mut self) {
        self.viewport.zoom_out(Instant::now());
        debug!(zoom = self.viewport.zoom, "Zoomed out");
    }

    pub(super) fn handle_reset_view(&mut self) {
        self.viewport.reset_view(Instant::now());
        debug!("Reset viewport");
    }

    pub(super) fn handle_animation_tick(&mut self, now: Instant) {
        self.viewport.animate(now);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::test_app;
    use crate::visual::DisplayMode;
    use std::time::{Duration, Instant};

    #[test]
    fn zoom_buttons_stay_within_bounds() {
        let mut app = test_app(DisplayMode::Image);
        for _ in 0..30 {
            let _ = app.update(Message::ZoomIn);
        }
        assert_eq!(app.viewport.zoom, 3.0);

        for _ in 0..30 {
            let _ = app.update(Message::ZoomOut);
        }
        assert_eq!(app.viewport.zoom, 0.8);

        let _ = app.update(Message::ResetView);
        assert_eq!(app.viewport.zoom, 1.0);
    }

    #[test]
    fn animation_tick_converges_on_the_target() {
        let mut app = test_app(DisplayMode::Image);
        let _ = app.update(Message::ZoomIn);
        assert!(app.viewport.is_animating());

        let done = Instant::now() + Duration::from_secs(1);
        let _ = app.update(Message::AnimationTick(done));
        assert!(!app.viewport.is_animating());
        assert!((app.viewport.shown_zoom - app.viewport.zoom).abs() < 1e-6);
    }
}
