//! Text formatting helpers for terminal screens.
//!
//! Dates arrive from the store as strings, either full RFC 3339 timestamps
//! (`2024-03-01T10:00:00Z`) or plain dates (`2024-03-15`). They are shown as
//! `Mar 15, 2024`; anything unparseable is shown verbatim.
//!
//! ## Examples
//!
//! ```rust
//! use taskflow::libs::formatter::{format_date, excerpt, checkbox};
//!
//! assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
//! assert_eq!(excerpt("Launch the new landing page", 10), "Launch the...");
//! assert_eq!(checkbox(true), "[x]");
//! ```

use chrono::{DateTime, NaiveDate};

const DATE_FORMAT: &str = "%b %d, %Y";
const PROGRESS_WIDTH: usize = 20;

pub fn format_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DATE_FORMAT).to_string();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(datetime) => datetime.date_naive().format(DATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// First `max` characters followed by `...`.
///
/// The ellipsis is appended even when nothing was cut, matching the cards of
/// the web dashboard.
pub fn excerpt(text: &str, max: usize) -> String {
    let head: String = text.chars().take(max).collect();
    format!("{}...", head)
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Fixed-width bar such as `[#####---------------]`.
pub fn progress_bar(percent: f64) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(PROGRESS_WIDTH - filled))
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.0}%", percent)
}

/// Marks a finished title, standing in for the strike-through of the web UI.
pub fn task_title(title: &str, done: bool) -> String {
    if done {
        format!("{} (done)", title)
    } else {
        title.to_string()
    }
}
