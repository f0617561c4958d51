//! Clock formatting helpers for the playback progress display.

/// Format seconds as `m:ss`. Non-finite or negative inputs render as "0:00"
/// so a transport that never reported metadata still shows something sane.
pub fn format_clock(seconds: f32) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    let minutes = total / 60;
    let secs = total % 60;
    format!("{minutes}:{secs:02}")
}

/// Progress label in the form `m:ss / m:ss`.
pub fn format_progress(position: f32, duration: f32) -> String {
    format!("{} / {}", format_clock(position), format_clock(duration))
}
