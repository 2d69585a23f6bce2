/// Utilities for date and time formatting
use chrono::{DateTime, NaiveDate, Utc};

/// Format a calendar date like "Jan 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a timestamp like "Jan 15, 2024 14:02"
pub fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime.format("%b %-d, %Y %H:%M").to_string()
}

/// Age of a timestamp relative to `now`: "Just now", "5 minutes ago", "3 hours ago",
/// "Yesterday", "4 days ago", then the plain date after a week.
pub fn format_relative(datetime: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(datetime);
    if elapsed.num_seconds() < 60 {
        return "Just now".to_string();
    }
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    match elapsed.num_days() {
        1 => "Yesterday".to_string(),
        days if days < 7 => plural(days, "day"),
        _ => format_date(datetime.date_naive()),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
        assert_eq!(format_datetime(now()), "Mar 15, 2024 14:02");
    }

    #[test]
    fn test_format_relative() {
        assert_eq!(format_relative(now(), now()), "Just now");
        assert_eq!(format_relative(now() - Duration::minutes(1), now()), "1 minute ago");
        assert_eq!(format_relative(now() - Duration::minutes(45), now()), "45 minutes ago");
        assert_eq!(format_relative(now() - Duration::hours(2), now()), "2 hours ago");
        assert_eq!(format_relative(now() - Duration::hours(30), now()), "Yesterday");
        assert_eq!(format_relative(now() - Duration::days(3), now()), "3 days ago");
        assert_eq!(format_relative(now() - Duration::days(10), now()), "Mar 5, 2024");
    }

    #[test]
    fn future_timestamps_count_as_just_now() {
        assert_eq!(format_relative(now() + Duration::hours(1), now()), "Just now");
    }
}
