/// Format a unix timestamp (millis) as `YYYY-MM-DD HH:MM` (UTC)
///
/// Returns an empty string for out-of-range timestamps.
pub fn format_millis(ts: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// Format a unix timestamp (millis) as a date only (`YYYY-MM-DD`, UTC)
pub fn format_millis_date(ts: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
