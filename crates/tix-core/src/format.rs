//! Display Formatting
//!
//! Timestamp and badge helpers shared by the list and detail views.

use chrono::DateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// "Jan 1, 2024, 09:05 AM" (table cells)
    Short,
    /// "January 1, 2024 at 09:05 AM" (detail view)
    Long,
}

/// Render an RFC 3339 timestamp in the offset it was recorded with.
/// Anything unparseable is shown as-is.
pub fn format_timestamp(value: &str, style: DateStyle) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(value) else {
        return value.to_string();
    };
    let pattern = match style {
        DateStyle::Short => "%b %-d, %Y, %I:%M %p",
        DateStyle::Long => "%B %-d, %Y at %I:%M %p",
    };
    parsed.format(pattern).to_string()
}

/// CSS class for a status badge
pub fn status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "open" => "status-open",
        "in progress" => "status-in-progress",
        "closed" => "status-closed",
        "resolved" => "status-resolved",
        _ => "status-default",
    }
}

/// CSS class for a category badge
pub fn category_class(category: &str) -> String {
    format!("category-{}", category.to_lowercase())
}
