/// Utilities for date, time and count formatting
///
/// Provides consistent formatting across list pages and modals
use chrono::{DateTime, Utc};

/// Format a timestamp as "YYYY-MM-DD HH:MM UTC"
/// Example: 2024-03-15T14:02:26.123Z -> "2024-03-15 14:02 UTC"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Like [`format_datetime`], with "N/A" for a missing timestamp
pub fn format_opt_datetime(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_datetime).unwrap_or_else(|| "N/A".to_string())
}

/// Human distance between `dt` and `now`, falling back to the date after a week
pub fn format_relative(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*dt);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if hours < 1 {
        plural(minutes, "minute")
    } else if days < 1 {
        plural(hours, "hour")
    } else if days < 7 {
        plural(days, "day")
    } else {
        dt.format("%Y-%m-%d").to_string()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Format a count with thousands separators
/// Example: 1234567 -> "1,234,567"
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 26).unwrap()
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(&at(2024, 3, 15, 14, 2)), "2024-03-15 14:02 UTC");
        assert_eq!(format_opt_datetime(None), "N/A");
        assert_eq!(
            format_opt_datetime(Some(&at(2024, 12, 31, 23, 59))),
            "2024-12-31 23:59 UTC"
        );
    }

    #[test]
    fn test_format_relative() {
        let now = at(2024, 3, 15, 14, 2);
        assert_eq!(format_relative(&(now - Duration::seconds(20)), &now), "just now");
        assert_eq!(format_relative(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(format_relative(&(now - Duration::minutes(45)), &now), "45 minutes ago");
        assert_eq!(format_relative(&(now - Duration::hours(3)), &now), "3 hours ago");
        assert_eq!(format_relative(&(now - Duration::days(2)), &now), "2 days ago");
        assert_eq!(format_relative(&(now - Duration::days(30)), &now), "2024-02-14");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
