use std::time::{Duration, Instant};

/// Auto-hide model for the floating playback panel.
///
/// Any pointer activity shows the panel and (re)schedules a single hide
/// deadline; a deadline that expires while the cursor hovers the panel is
/// consumed without hiding and nothing re-arms it until the next activity or
/// hover-leave. Leaving the panel schedules a fresh deadline so the overlay
/// cannot get stuck visible.
pub struct OverlayState {
    pub(in crate::app) visible: bool,
    pub(in crate::app) hovering: bool,
    pub(in crate::app) hide_deadline: Option<Instant>,
    hide_delay: Duration,
}

impl OverlayState {
    pub(in crate::app) fn new(hide_delay: Duration) -> Self {
        Self {
            visible: true,
            hovering: false,
            hide_deadline: None,
            hide_delay,
        }
    }

    /// Pointer moved, clicked, or touched somewhere in the window: show the
    /// panel and replace any pending deadline (debounce, not throttle).
    pub(in crate::app) fn note_activity(&mut self, now: Instant) {
        self.visible = true;
        self.hide_deadline = Some(now + self.hide_delay);
    }

    pub(in crate::app) fn set_hovering(&mut self, now: Instant, hovering: bool) {
        self.hovering = hovering;
        if !hovering && self.visible {
            self.hide_deadline = Some(now + self.hide_delay);
        }
    }

    /// Check the pending deadline. An elapsed deadline is always consumed;
    /// hiding is suppressed while hovering. Returns whether visibility
    /// changed.
    pub(in crate::app) fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.hide_deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.hide_deadline = None;
        if self.hovering {
            return false;
        }
        let was_visible = self.visible;
        self.visible = false;
        was_visible
    }

    /// Whether the hide-poll subscription needs to run.
    pub(in crate::app) fn hide_pending(&self) -> bool {
        self.hide_deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> OverlayState {
        OverlayState::new(Duration::from_millis(1000))
    }

    #[test]
    fn starts_visible_with_no_deadline() {
        let overlay = overlay();
        assert!(overlay.visible);
        assert!(!overlay.hide_pending());
    }

    #[test]
    fn activity_shows_and_schedules() {
        let mut overlay = overlay();
        let t0 = Instant::now();
        overlay.visible = false;

        overlay.note_activity(t0);
        assert!(overlay.visible);
        assert_eq!(overlay.hide_deadline, Some(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn repeated_activity_debounces_to_last_deadline() {
        let mut overlay = overlay();
        let t0 = Instant::now();

        for step in 0..5 {
            overlay.note_activity(t0 + Duration::from_millis(step * 300));
        }
        let expected = t0 + Duration::from_millis(4 * 300 + 1000);
        assert_eq!(overlay.hide_deadline, Some(expected));

        // Before the final deadline nothing hides.
        assert!(!overlay.tick(expected - Duration::from_millis(1)));
        assert!(overlay.visible);

        // Exactly one hide at the deadline scheduled from the last activity.
        assert!(overlay.tick(expected));
        assert!(!overlay.visible);
        assert!(!overlay.hide_pending());
    }

    #[test]
    fn hover_suppresses_hide_and_consumes_deadline() {
        let mut overlay = overlay();
        let t0 = Instant::now();
        overlay.note_activity(t0);
        overlay.set_hovering(t0, true);

        assert!(!overlay.tick(t0 + Duration::from_secs(5)));
        assert!(overlay.visible);
        // Consumed: no further tick can hide until something re-arms.
        assert!(!overlay.hide_pending());
        assert!(!overlay.tick(t0 + Duration::from_secs(60)));
        assert!(overlay.visible);
    }

    #[test]
    fn hover_leave_rearms_the_countdown() {
        let mut overlay = overlay();
        let t0 = Instant::now();
        overlay.note_activity(t0);
        overlay.set_hovering(t0, true);
        overlay.tick(t0 + Duration::from_secs(5));

        let t_leave = t0 + Duration::from_secs(6);
        overlay.set_hovering(t_leave, false);
        assert_eq!(
            overlay.hide_deadline,
            Some(t_leave + Duration::from_millis(1000))
        );

        assert!(overlay.tick(t_leave + Duration::from_millis(1000)));
        assert!(!overlay.visible);
    }

    #[test]
    fn hover_enter_alone_does_not_schedule() {
        let mut overlay = overlay();
        overlay.set_hovering(Instant::now(), true);
        assert!(!overlay.hide_pending());
    }

    #[test]
    fn hidden_overlay_hover_leave_does_not_schedule() {
        let mut overlay = overlay();
        let t0 = Instant::now();
        overlay.note_activity(t0);
        overlay.tick(t0 + Duration::from_secs(2));
        assert!(!overlay.visible);

        overlay.set_hovering(t0 + Duration::from_secs(3), false);
        assert!(!overlay.hide_pending());
    }
}
