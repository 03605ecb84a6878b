use chrono::DateTime;

/// Render an RFC 3339 timestamp as `{month abbrev} {day}, {year}, {hour}:{minute}`,
/// e.g. `Mar 4, 2026, 09:15`. Month names are fixed English abbreviations.
///
/// An unparseable timestamp is rendered as the raw string.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%b %-d, %Y, %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
