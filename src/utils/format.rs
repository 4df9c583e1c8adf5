//! Formatting utilities for file sizes and modification times.

use chrono::{DateTime, FixedOffset};

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;

/// Format a byte count for display (e.g., "512 B", "3 KB", "1.5 MB").
///
/// Negative sizes (unknown directory sizes) render as "-".
pub fn format_bytes(size: i64) -> String {
    if size < 0 {
        return "-".to_string();
    }
    let bytes = size as f64;
    if bytes < KB {
        format!("{} B", size)
    } else if bytes < MB {
        format!("{:.0} KB", bytes / KB)
    } else if bytes < GB {
        format!("{:.1} MB", bytes / MB)
    } else {
        format!("{:.1} GB", bytes / GB)
    }
}

/// Format a millisecond timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// `utc_offset_secs` is the viewer's offset east of UTC.
pub fn format_timestamp(ms: i64, utc_offset_secs: i32) -> String {
    let offset = FixedOffset::east_opt(utc_offset_secs)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset"));
    DateTime::from_timestamp_millis(ms)
        .map(|t| t.with_timezone(&offset).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Relative time such as "5 minutes ago" or "in 2 hours".
pub fn format_from_now(ms: i64, now_ms: i64) -> String {
    let delta_secs = (now_ms - ms) / 1000;
    let future = delta_secs < 0;
    let secs = delta_secs.abs();

    let phrase = match secs {
        0..=44 => "a few seconds".to_string(),
        45..=89 => "a minute".to_string(),
        90..=2_699 => format!("{} minutes", (secs + 30) / 60),
        2_700..=5_399 => "an hour".to_string(),
        5_400..=79_199 => format!("{} hours", (secs + 1_800) / 3_600),
        79_200..=129_599 => "a day".to_string(),
        129_600..=2_203_199 => format!("{} days", (secs + 43_200) / 86_400),
        2_203_200..=3_887_999 => "a month".to_string(),
        3_888_000..=29_807_999 => format!("{} months", (secs + 1_296_000) / 2_592_000),
        29_808_000..=47_303_999 => "a year".to_string(),
        _ => format!("{} years", (secs + 15_768_000) / 31_536_000),
    };

    if future {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

/// Current time in milliseconds, from the browser clock.
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// The browser's offset east of UTC in seconds.
pub fn local_utc_offset_secs() -> i32 {
    // getTimezoneOffset() is minutes *behind* UTC
    let minutes = js_sys::Date::new_0().get_timezone_offset();
    -(minutes as i32) * 60
}
