use super::constants::{MAX_ZOOM, MIN_ZOOM, VIEW_ANIM_DURATION, ZOOM_STEP};
use iced::{Point, Vector};
use std::time::Instant;

/// Zoom/pan model for image mode.
///
/// `zoom` and `offset` are the target transform; `shown_zoom`/`shown_offset`
/// are what the canvas renders. While dragging they track the targets
/// directly, otherwise button-driven changes ease toward them over a short
/// fixed duration. Offsets accumulate in image space (screen delta divided
/// by zoom), so a drag moves the picture the same distance under the cursor
/// at any zoom level.
pub struct ViewportState {
    pub(in crate::app) zoom: f32,
    pub(in crate::app) offset: Vector,
    pub(in crate::app) dragging: bool,
    pub(in crate::app) last_pointer: Option<Point>,
    pub(in crate::app) shown_zoom: f32,
    pub(in crate::app) shown_offset: Vector,
    anim: Option<Transition>,
}

struct Transition {
    from_zoom: f32,
    from_offset: Vector,
    started_at: Instant,
}

impl ViewportState {
    pub(in crate::app) fn new() -> Self {
        Self {
            zoom: 1.0,
            offset: Vector::ZERO,
            dragging: false,
            last_pointer: None,
            shown_zoom: 1.0,
            shown_offset: Vector::ZERO,
            anim: None,
        }
    }

    pub(in crate::app) fn zoom_in(&mut self, now: Instant) {
        self.set_zoom_target(self.zoom + ZOOM_STEP, now);
    }

    pub(in crate::app) fn zoom_out(&mut self, now: Instant) {
        self.set_zoom_target(self.zoom - ZOOM_STEP, now);
    }

    pub(in crate::app) fn zoom_step_by(&mut self, steps: f32, now: Instant) {
        if steps != 0.0 && steps.is_finite() {
            self.set_zoom_target(self.zoom + steps.signum() * ZOOM_STEP, now);
        }
    }

    pub(in crate::app) fn reset_view(&mut self, now: Instant) {
        if (self.zoom - 1.0).abs() < f32::EPSILON
            && self.offset.x == 0.0
            && self.offset.y == 0.0
        {
            return;
        }
        self.zoom = 1.0;
        self.offset = Vector::ZERO;
        self.begin_transition(now);
    }

    /// Begin a drag from the last known pointer position (mouse presses
    /// carry no coordinates of their own).
    pub(in crate::app) fn begin_drag(&mut self) {
        self.settle();
        self.dragging = true;
    }

    /// Begin a drag at an explicit position (touch start).
    pub(in crate::app) fn begin_drag_at(&mut self, position: Point) {
        self.settle();
        self.dragging = true;
        self.last_pointer = Some(position);
    }

    /// Track a pointer move. Only accumulates into the offset while a drag is
    /// active; a move that arrives after the drag ended just updates the
    /// remembered position.
    pub(in crate::app) fn pointer_moved(&mut self, position: Point) {
        if self.dragging {
            if let Some(last) = self.last_pointer {
                let delta = position - last;
                self.offset =
                    self.offset + Vector::new(delta.x / self.zoom, delta.y / self.zoom);
                self.shown_offset = self.offset;
            }
        }
        self.last_pointer = Some(position);
    }

    pub(in crate::app) fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Advance the easing toward the target transform.
    pub(in crate::app) fn animate(&mut self, now: Instant) {
        let Some(anim) = &self.anim else {
            return;
        };
        let elapsed = now.saturating_duration_since(anim.started_at);
        let t = (elapsed.as_secs_f32() / VIEW_ANIM_DURATION.as_secs_f32()).min(1.0);
        let eased = ease_out_cubic(t);
        self.shown_zoom = lerp(anim.from_zoom, self.zoom, eased);
        self.shown_offset = Vector::new(
            lerp(anim.from_offset.x, self.offset.x, eased),
            lerp(anim.from_offset.y, self.offset.y, eased),
        );
        if t >= 1.0 {
            self.anim = None;
        }
    }

    pub(in crate::app) fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    fn set_zoom_target(&mut self, zoom: f32, now: Instant) {
        let clamped = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if (clamped - self.zoom).abs() < f32::EPSILON {
            return;
        }
        self.zoom = clamped;
        self.begin_transition(now);
    }

    fn begin_transition(&mut self, now: Instant) {
        if self.dragging {
            self.settle();
        } else {
            self.anim = Some(Transition {
                from_zoom: self.shown_zoom,
                from_offset: self.shown_offset,
                started_at: now,
            });
        }
    }

    /// Snap the rendered transform to the target and drop any easing.
    fn settle(&mut self) {
        self.anim = None;
        self.shown_zoom = self.zoom;
        self.shown_offset = self.offset;
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
