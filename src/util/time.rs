use chrono::{DateTime, TimeZone};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Human readable age of `then` as seen from `now`.
///
/// "just now" under a minute, then whole minutes, hours and days.
/// Timestamps in the future count as "just now".
pub fn relative_time<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let elapsed = now.clone().signed_duration_since(then.clone()).num_seconds();

    if elapsed < MINUTE {
        "just now".to_string()
    } else if elapsed < HOUR {
        format!("{} minutes ago", elapsed / MINUTE)
    } else if elapsed < DAY {
        format!("{} hours ago", elapsed / HOUR)
    } else {
        format!("{} days ago", elapsed / DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn ago(delta: Duration) -> String {
        let now = Local::now();
        relative_time(&(now - delta), &now)
    }

    #[test]
    fn test_buckets() {
        assert_eq!(ago(Duration::seconds(30)), "just now");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::hours(2)), "2 hours ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
    }

    #[test]
    fn test_bucket_edges() {
        assert_eq!(ago(Duration::seconds(59)), "just now");
        assert_eq!(ago(Duration::seconds(60)), "1 minutes ago");
        assert_eq!(ago(Duration::seconds(3599)), "59 minutes ago");
        assert_eq!(ago(Duration::hours(24)), "1 days ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(ago(Duration::seconds(-90)), "just now");
    }

    #[test]
    fn test_days_use_total_elapsed() {
        // 1 day and 30 seconds is still a day, not "just now"
        assert_eq!(ago(Duration::days(1) + Duration::seconds(30)), "1 days ago");
    }
}
