use super::super::messages::Message;
use super::super::state::{App, OVERLAY_POLL, POSITION_POLL, VIEW_ANIM_POLL};
use super::{Effect, runtime};
use iced::event;
use iced::time;
use iced::{Subscription, Task};

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime::runtime_event_to_message)];

        if app.playback.is_playing {
            subscriptions.push(time::every(POSITION_POLL).map(Message::PositionTick));
        }
        if app.overlay.hide_pending() {
            subscriptions.push(time::every(OVERLAY_POLL).map(Message::OverlayTick));
        }
        if app.viewport.is_animating() {
            subscriptions.push(time::every(VIEW_ANIM_POLL).map(Message::AnimationTick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::TogglePlayPause => self.handle_toggle_play_pause(&mut effects),
            Message::Stop => self.handle_stop(&mut effects),
            Message::SpeedSelected(speed) => self.handle_speed_selected(speed, &mut effects),
            Message::VolumeChanged(volume) => self.handle_volume_changed(volume, &mut effects),
            Message::SeekChanged(target) => self.handle_seek_changed(target, &mut effects),
            Message::PositionTick(now) => self.handle_position_tick(now),
            Message::PointerMoved(position) => self.handle_pointer_moved(position),
            Message::PointerPressed => self.handle_pointer_pressed(),
            Message::PointerReleased => self.handle_drag_ended(),
            Message::PointerLeft => self.handle_drag_ended(),
            Message::TouchStarted(position) => self.handle_touch_started(position),
            Message::TouchMoved(position) => self.handle_touch_moved(position),
            Message::TouchEnded => self.handle_drag_ended(),
            Message::WheelScrolled(delta) => self.handle_wheel_scrolled(delta),
            Message::OverlayHoverChanged(hovering) => self.handle_overlay_hover_changed(hovering),
            Message::ZoomIn => self.handle_zoom_in(),
            Message::ZoomOut => self.handle_zoom_out(),
            Message::ResetView => self.handle_reset_view(),
            Message::OverlayTick(now) => self.handle_overlay_tick(now),
            Message::AnimationTick(now) => self.handle_animation_tick(now),
        }

        effects
    }
}
