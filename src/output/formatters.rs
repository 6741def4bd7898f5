//! Reusable formatting utilities for CLI output
//!
//! Timestamps from Mattermost are Unix epoch milliseconds.

use chrono::{DateTime, TimeZone, Utc};

/// Format a Unix timestamp (milliseconds) as a `DD-MM-YYYY` UTC date.
///
/// Returns "never" for a zero timestamp and "N/A" if it is out of range.
pub fn format_epoch_date(millis: i64) -> String {
    if millis == 0 {
        return "never".to_string();
    }

    match Utc.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt.format("%d-%m-%Y").to_string(),
        _ => "N/A".to_string(),
    }
}

/// Whole days elapsed between a Unix timestamp (milliseconds) and `now`.
///
/// Rounds toward zero, so 23 hours counts as 0 days. A zero timestamp is
/// treated as the epoch, which makes never-active accounts very old.
pub fn days_since(millis: i64, now: DateTime<Utc>) -> i64 {
    now.timestamp_millis().saturating_sub(millis) / (24 * 60 * 60 * 1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_epoch_date_valid() {
        // Jan 15, 2025 12:00:00 UTC in milliseconds
        assert_eq!(format_epoch_date(1_736_942_400_000), "15-01-2025");
    }

    #[test]
    fn test_format_epoch_date_zero() {
        assert_eq!(format_epoch_date(0), "never");
    }

    #[test]
    fn test_format_epoch_date_out_of_range() {
        assert_eq!(format_epoch_date(i64::MAX), "N/A");
    }

    #[test]
    fn test_days_since_whole_days() {
        let now = Utc::now();
        let then = (now - Duration::days(200)).timestamp_millis();
        assert_eq!(days_since(then, now), 200);
    }

    #[test]
    fn test_days_since_truncates_partial_days() {
        let now = Utc::now();
        let then = (now - Duration::hours(23)).timestamp_millis();
        assert_eq!(days_since(then, now), 0);

        let then = (now - Duration::hours(47)).timestamp_millis();
        assert_eq!(days_since(then, now), 1);
    }

    #[test]
    fn test_days_since_extreme_timestamps() {
        let now = Utc::now();
        assert!(days_since(i64::MIN, now) > 0);
        assert!(days_since(i64::MAX, now) < 0);
    }

    #[test]
    fn test_days_since_future_timestamp() {
        let now = Utc::now();
        let then = (now + Duration::days(3)).timestamp_millis();
        assert!(days_since(then, now) <= 0);
    }
}
