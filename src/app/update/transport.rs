use super::super::state::App;
use super::{Effect, TransportCommand};
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_play_pause(&mut self, effects: &mut Vec<Effect>) {
        if self.playback.is_playing {
            effects.push(Effect::Transport(TransportCommand::Pause));
        } else {
            effects.push(Effect::Transport(TransportCommand::Play));
        }
    }

    pub(super) fn handle_stop(&mut self, effects: &mut Vec<Effect>) {
        effects.push(Effect::Transport(TransportCommand::Stop));
    }

    pub(super) fn handle_speed_selected(&mut self, speed: f32, effects: &mut Vec<Effect>) {
        if self.playback.select_speed(speed) {
            info!(speed, "Selected playback speed");
            effects.push(Effect::Transport(TransportCommand::SetSpeed(speed)));
        } else {
            debug!(speed, "Ignoring speed outside the offered set");
        }
    }

    pub(super) fn handle_volume_changed(&mut self, volume: f32, effects: &mut Vec<Effect>) {
        let clamped = self.playback.set_volume_clamped(volume);
        effects.push(Effect::Transport(TransportCommand::SetVolume(clamped)));
    }

    pub(super) fn handle_seek_changed(&mut self, target: f32, effects: &mut Vec<Effect>) {
        let effective = self.playback.seek_clamped(target);
        effects.push(Effect::Transport(TransportCommand::Seek(effective)));
    }

    /// Fold the transport's current position/duration into the model. Runs
    /// only while playing; also notices the sink draining at end of track.
    pub(super) fn handle_position_tick(&mut self, _now: Instant) {
        if self.transport.finished() {
            self.playback.is_playing = false;
            if self.playback.duration > 0.0 {
                self.playback.position = self.playback.duration;
            }
            info!("Playback reached end of track");
            return;
        }

        let Some(position) = self.transport.position() else {
            return;
        };
        let duration = self
            .transport
            .duration()
            .map(|total| total.as_secs_f32())
            .unwrap_or(0.0);
        self.playback
            .apply_position_report(position.as_secs_f32(), duration);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::test_app;
    use super::super::{Effect, TransportCommand};
    use crate::visual::DisplayMode;

    fn transport_commands(effects: &[Effect]) -> Vec<TransportCommand> {
        effects
            .iter()
            .map(|Effect::Transport(command)| *command)
            .collect()
    }

    #[test]
    fn toggle_emits_play_then_pause_command() {
        let mut app = test_app(DisplayMode::Document);
        let effects = app.reduce(Message::TogglePlayPause);
        assert_eq!(transport_commands(&effects), vec![TransportCommand::Play]);

        app.playback.is_playing = true;
        let effects = app.reduce(Message::TogglePlayPause);
        assert_eq!(transport_commands(&effects), vec![TransportCommand::Pause]);
    }

    #[test]
    fn volume_command_carries_the_clamped_value() {
        let mut app = test_app(DisplayMode::Document);
        let effects = app.reduce(Message::VolumeChanged(7.0));
        assert_eq!(
            transport_commands(&effects),
            vec![TransportCommand::SetVolume(1.0)]
        );
    }

    #[test]
    fn seek_command_carries_the_clamped_target() {
        let mut app = test_app(DisplayMode::Document);
        app.playback.apply_position_report(0.0, 60.0);
        let effects = app.reduce(Message::SeekChanged(90.0));
        assert_eq!(
            transport_commands(&effects),
            vec![TransportCommand::Seek(60.0)]
        );
    }

    #[test]
    fn rejected_speed_emits_no_command() {
        let mut app = test_app(DisplayMode::Document);
        let effects = app.reduce(Message::SpeedSelected(1.5));
        assert!(effects.is_empty());
        assert_eq!(app.playback.speed, 1.0);
    }

    #[test]
    fn position_tick_without_live_audio_changes_nothing() {
        let mut app = test_app(DisplayMode::Document);
        app.playback.apply_position_report(10.0, 60.0);
        let effects = app.reduce(Message::PositionTick(std::time::Instant::now()));
        assert!(effects.is_empty());
        assert_eq!(app.playback.position, 10.0);
        assert_eq!(app.playback.duration, 60.0);
    }
}
