use std::time::Duration;

/// Limits and defaults for the playback and viewport controls.
pub(crate) const SPEED_OPTIONS: [f32; 3] = [1.0, 0.75, 0.5];
pub(crate) const MIN_VOLUME: f32 = 0.0;
pub(crate) const MAX_VOLUME: f32 = 1.0;
pub(crate) const MIN_ZOOM: f32 = 0.8;
pub(crate) const MAX_ZOOM: f32 = 3.0;
pub(crate) const ZOOM_STEP: f32 = 0.2;

/// Poll cadences for the conditional tick subscriptions.
pub(crate) const POSITION_POLL: Duration = Duration::from_millis(250);
pub(crate) const OVERLAY_POLL: Duration = Duration::from_millis(200);
pub(crate) const VIEW_ANIM_POLL: Duration = Duration::from_millis(16);

/// Length of the ease-out applied to button-driven viewport changes.
pub(crate) const VIEW_ANIM_DURATION: Duration = Duration::from_millis(160);

/// Bounds applied to the configured overlay hide delay.
pub(crate) const MIN_HIDE_DELAY_MS: u64 = 250;
pub(crate) const MAX_HIDE_DELAY_MS: u64 = 60_000;
