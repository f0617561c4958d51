pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_controls_hide_delay_ms() -> u64 {
    4000
}

pub(crate) fn default_initial_volume() -> f32 {
    1.0
}

pub(crate) fn default_initial_speed() -> f32 {
    1.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
