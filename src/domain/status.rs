use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Badge classification for an activity status.
///
/// The mapping is a total function: every status string, including ones the
/// backend adds later, lands in exactly one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Badge {
    Success,
    Warning,
    Error,
    Info,
}

impl Badge {
    /// Classify a raw status string. Unknown statuses map to `Info`.
    pub fn from_status(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "completed" | "approved" | "hired" => Badge::Success,
            "processing" | "in_progress" | "scheduled" => Badge::Warning,
            "failed" | "rejected" => Badge::Error,
            "pending" => Badge::Info,
            _ => Badge::Info,
        }
    }

    pub fn style(self) -> Style {
        Style::default().fg(self.color())
    }

    pub fn color(self) -> Color {
        match self {
            Badge::Success => Color::Green,
            Badge::Warning => Color::Yellow,
            Badge::Error => Color::Red,
            Badge::Info => Color::Blue,
        }
    }
}

/// Glyph for an activity status. Mirrors the badge mapping, with a neutral
/// glyph for unrecognized or absent statuses.
pub fn status_icon(status: Option<&str>) -> &'static str {
    let Some(status) = status else {
        return "•";
    };

    match status.to_ascii_lowercase().as_str() {
        "completed" | "approved" | "hired" => "✓",
        "processing" | "in_progress" | "scheduled" => "…",
        "failed" | "rejected" => "✗",
        "pending" => "○",
        _ => "•",
    }
}
