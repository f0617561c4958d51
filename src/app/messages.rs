use iced::Point;
use std::time::Instant;

/// Messages emitted by the UI and the runtime event listener.
#[derive(Debug, Clone)]
pub enum Message {
    TogglePlayPause,
    Stop,
    SpeedSelected(f32),
    VolumeChanged(f32),
    SeekChanged(f32),
    /// Pointer activity anywhere in the window (uncaptured by widgets).
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    PointerLeft,
    TouchStarted(Point),
    TouchMoved(Point),
    TouchEnded,
    WheelScrolled(f32),
    /// Cursor entered or left the playback overlay.
    OverlayHoverChanged(bool),
    ZoomIn,
    ZoomOut,
    ResetView,
    /// Transport position poll, active while playing.
    PositionTick(Instant),
    /// Hide-deadline poll, active while a deadline is pending.
    OverlayTick(Instant),
    /// Viewport easing poll, active mid-animation.
    AnimationTick(Instant),
}
