//! Backend health state shown in the status pill

use ratatui::style::Color;

/// Tri-state health of the prediction backend, plus the state before the
/// first probe completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    /// No probe has completed yet
    #[default]
    Unknown,
    /// Backend reachable and the model is loaded
    Online,
    /// Backend reachable but not ready to serve predictions
    Degraded,
    /// Timeout, connection failure, or non-2xx status
    Offline,
}

impl ApiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Unknown => "checking…",
            ApiStatus::Online => "online",
            ApiStatus::Degraded => "degraded",
            ApiStatus::Offline => "offline",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ApiStatus::Unknown => Color::DarkGray,
            ApiStatus::Online => Color::Green,
            ApiStatus::Degraded => Color::Yellow,
            ApiStatus::Offline => Color::Red,
        }
    }
}
