use super::super::state::App;
use iced::Point;
use std::time::Instant;

/// Global pointer and touch handling. Every qualifying activity (move,
/// press, touch start, wheel) wakes the overlay; drag gestures feed the
/// viewport only while an image is mounted.
impl App {
    pub(super) fn handle_pointer_moved(&mut self, position: Point) {
        self.overlay.note_activity(Instant::now());
        if self.is_image_mode() {
            self.viewport.pointer_moved(position);
        }
    }

    pub(super) fn handle_pointer_pressed(&mut self) {
        self.overlay.note_activity(Instant::now());
        if self.is_image_mode() {
            self.viewport.begin_drag();
        }
    }

    pub(super) fn handle_touch_started(&mut self, position: Point) {
        self.overlay.note_activity(Instant::now());
        if self.is_image_mode() {
            self.viewport.begin_drag_at(position);
        }
    }

    /// Touch moves drive the drag but do not count as overlay activity.
    pub(super) fn handle_touch_moved(&mut self, position: Point) {
        if self.is_image_mode() {
            self.viewport.pointer_moved(position);
        }
    }

    pub(super) fn handle_drag_ended(&mut self) {
        if self.is_image_mode() {
            self.viewport.end_drag();
        }
    }

    pub(super) fn handle_wheel_scrolled(&mut self, delta: f32) {
        let now = Instant::now();
        self.overlay.note_activity(now);
        if self.is_image_mode() {
            self.viewport.zoom_step_by(delta, now);
        }
    }
}
