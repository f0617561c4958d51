use super::super::messages::Message;
use super::super::state::App;
use super::{Effect, TransportCommand};
use iced::Event;
use iced::Task;
use iced::event;
use iced::mouse;
use iced::touch;
use iced::window;
use std::time::Duration;
use tracing::{debug, info};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Transport(command) => {
                self.apply_transport_command(command);
                Task::none()
            }
        }
    }

    fn apply_transport_command(&mut self, command: TransportCommand) {
        match command {
            TransportCommand::Play => {
                // The transport rejects the command when its resource never
                // loaded or cannot be re-queued; the playing flag mirrors
                // what actually happened, like an audio element's play
                // notification.
                if self.transport.play() {
                    self.playback.is_playing = true;
                    info!("Playback started");
                } else {
                    debug!("Play request ignored by inert transport");
                }
            }
            TransportCommand::Pause => {
                self.transport.pause();
                self.playback.is_playing = false;
            }
            TransportCommand::Stop => {
                self.transport.stop();
                self.playback.mark_stopped();
                info!("Playback stopped");
            }
            TransportCommand::SetSpeed(speed) => self.transport.set_speed(speed),
            TransportCommand::SetVolume(volume) => self.transport.set_volume(volume),
            TransportCommand::Seek(seconds) => {
                self.transport.seek(Duration::from_secs_f32(seconds));
            }
        }
    }
}

/// Map uncaptured window events onto messages. Everything a widget already
/// handled (button presses, slider drags) stays out of the global stream.
pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            let vertical = match delta {
                mouse::ScrollDelta::Lines { y, .. } => y,
                mouse::ScrollDelta::Pixels { y, .. } => y,
            };
            Some(Message::WheelScrolled(vertical))
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchStarted(position))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::TouchMoved(position))
        }
        Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Message::TouchEnded)
        }
        _ => None,
    }
}
