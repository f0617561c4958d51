use super::constants::{MAX_VOLUME, MIN_VOLUME, SPEED_OPTIONS};

/// Playback model mirrored from the audio transport. Mutated only by
/// transport reports and explicit control actions routed through the
/// reducer.
pub struct PlaybackState {
    pub(in crate::app) is_playing: bool,
    pub(in crate::app) speed: f32,
    pub(in crate::app) volume: f32,
    /// Seconds into the track.
    pub(in crate::app) position: f32,
    /// Track length in seconds; 0.0 until the transport reports metadata.
    pub(in crate::app) duration: f32,
}

impl PlaybackState {
    pub(in crate::app) fn new(volume: f32, speed: f32) -> Self {
        Self {
            is_playing: false,
            speed: snap_speed(speed),
            volume: volume.clamp(MIN_VOLUME, MAX_VOLUME),
            position: 0.0,
            duration: 0.0,
        }
    }

    /// Fold a periodic position/duration report into the model, keeping
    /// `position <= duration` once the duration is known.
    pub(in crate::app) fn apply_position_report(&mut self, position: f32, duration: f32) {
        if duration.is_finite() && duration > 0.0 {
            self.duration = duration;
        }
        if position.is_finite() && position >= 0.0 {
            self.position = if self.duration > 0.0 {
                position.min(self.duration)
            } else {
                position
            };
        }
    }

    /// Clamp and store a requested seek target; returns the effective
    /// position. Play/pause state is untouched.
    pub(in crate::app) fn seek_clamped(&mut self, target: f32) -> f32 {
        let clamped = if target.is_finite() {
            target.clamp(0.0, self.duration.max(0.0))
        } else {
            0.0
        };
        self.position = clamped;
        clamped
    }

    /// Store a speed selection; values outside the offered set are ignored.
    /// Returns whether the selection was accepted.
    pub(in crate::app) fn select_speed(&mut self, speed: f32) -> bool {
        if SPEED_OPTIONS
            .iter()
            .any(|option| (option - speed).abs() < f32::EPSILON)
        {
            self.speed = speed;
            true
        } else {
            false
        }
    }

    pub(in crate::app) fn set_volume_clamped(&mut self, volume: f32) -> f32 {
        let clamped = if volume.is_finite() {
            volume.clamp(MIN_VOLUME, MAX_VOLUME)
        } else {
            self.volume
        };
        self.volume = clamped;
        clamped
    }

    pub(in crate::app) fn mark_stopped(&mut self) {
        self.is_playing = false;
        self.position = 0.0;
    }
}

fn snap_speed(speed: f32) -> f32 {
    SPEED_OPTIONS
        .iter()
        .copied()
        .min_by(|a, b| {
            (a - speed)
                .abs()
                .partial_cmp(&(b - speed).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_is_clamped() {
        let mut playback = PlaybackState::new(1.0, 1.0);
        assert_eq!(playback.set_volume_clamped(1.8), 1.0);
        assert_eq!(playback.set_volume_clamped(-0.3), 0.0);
        assert_eq!(playback.set_volume_clamped(0.4), 0.4);
    }

    #[test]
    fn non_finite_volume_is_ignored() {
        let mut playback = PlaybackState::new(0.7, 1.0);
        assert_eq!(playback.set_volume_clamped(f32::NAN), 0.7);
    }

    #[test]
    fn position_report_respects_known_duration() {
        let mut playback = PlaybackState::new(1.0, 1.0);
        playback.apply_position_report(42.3, 180.0);
        assert_eq!(playback.position, 42.3);
        assert_eq!(playback.duration, 180.0);

        playback.apply_position_report(200.0, 180.0);
        assert_eq!(playback.position, 180.0);
    }

    #[test]
    fn position_passes_through_while_duration_unknown() {
        let mut playback = PlaybackState::new(1.0, 1.0);
        playback.apply_position_report(5.0, 0.0);
        assert_eq!(playback.position, 5.0);
        assert_eq!(playback.duration, 0.0);
    }

    #[test]
    fn seek_clamps_and_is_idempotent() {
        let mut playback = PlaybackState::new(1.0, 1.0);
        playback.apply_position_report(0.0, 120.0);
        playback.is_playing = true;

        assert_eq!(playback.seek_clamped(300.0), 120.0);
        let first = playback.seek_clamped(30.0);
        let second = playback.seek_clamped(30.0);
        assert_eq!(first, second);
        assert_eq!(playback.position, 30.0);
        assert!(playback.is_playing);
    }

    #[test]
    fn seek_with_unknown_duration_pins_to_zero() {
        let mut playback = PlaybackState::new(1.0, 1.0);
        assert_eq!(playback.seek_clamped(12.0), 0.0);
    }

    #[test]
    fn speed_selection_only_accepts_offered_values() {
        let mut playback = PlaybackState::new(1.0, 1.0);
        assert!(playback.select_speed(0.5));
        assert_eq!(playback.speed, 0.5);
        assert!(!playback.select_speed(2.0));
        assert_eq!(playback.speed, 0.5);
    }

    #[test]
    fn initial_speed_snaps_to_offered_set() {
        let playback = PlaybackState::new(1.0, 0.8);
        assert_eq!(playback.speed, 0.75);
    }

    #[test]
    fn stop_resets_position_and_playing_flag() {
        let mut playback = PlaybackState::new(1.0, 1.0);
        playback.apply_position_report(90.0, 180.0);
        playback.is_playing = true;

        playback.mark_stopped();
        assert!(!playback.is_playing);
        assert_eq!(playback.position, 0.0);
        assert_eq!(playback.duration, 180.0);
    }
}
