use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Turns an order's raw `createdAt` value into the text shown in the Date
/// column.
pub trait TimeFormatter: Send + Sync {
    fn format(&self, timestamp: &str) -> String;
}

/// Relative phrasing ("an hour ago", "in 3 days") measured against a clock.
///
/// Thresholds match the date library the storefront pages were built with, so
/// the wording does not change:
///
/// | elapsed (rounded)  | phrase            |
/// |--------------------|-------------------|
/// | <= 44 seconds      | a few seconds     |
/// | <= 1 minute        | a minute          |
/// | < 45 minutes       | N minutes         |
/// | <= 1 hour          | an hour           |
/// | < 22 hours         | N hours           |
/// | <= 1 day           | a day             |
/// | < 26 days          | N days            |
/// | <= 1 month         | a month           |
/// | < 11 months        | N months          |
/// | <= 1 year          | a year            |
/// | otherwise          | N years           |
#[derive(Debug, Clone, Default)]
pub struct RelativeTime {
    fixed_now: Option<DateTime<Utc>>,
}

const DAYS_PER_MONTH: f64 = 146_097.0 / 4_800.0;
const DAYS_PER_YEAR: f64 = 146_097.0 / 400.0;

impl RelativeTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures against a fixed instant instead of the wall clock.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            fixed_now: Some(now),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }

    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let delta_ms = (now - then).num_milliseconds();
        let phrase = humanize(delta_ms.unsigned_abs() as f64 / 1000.0);
        if delta_ms < 0 {
            format!("in {phrase}")
        } else {
            format!("{phrase} ago")
        }
    }
}

impl TimeFormatter for RelativeTime {
    fn format(&self, timestamp: &str) -> String {
        match parse_timestamp(timestamp) {
            Some(then) => Self::between(then, self.now()),
            None => "Invalid date".to_string(),
        }
    }
}

fn humanize(abs_secs: f64) -> String {
    let seconds = abs_secs.round();
    let minutes = (abs_secs / 60.0).round();
    let hours = (abs_secs / 3_600.0).round();
    let days = (abs_secs / 86_400.0).round();
    let months = (abs_secs / 86_400.0 / DAYS_PER_MONTH).round();
    let years = (abs_secs / 86_400.0 / DAYS_PER_YEAR).round();

    if seconds <= 44.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{months} months")
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}

/// Accepts RFC 3339 and the zone-less ISO forms the backend has been seen
/// to emit; zone-less values are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 14, 9, 26, 6).unwrap()
    }

    #[test]
    fn phrases_past_distances() {
        let cases = [
            (Duration::seconds(10), "a few seconds ago"),
            (Duration::seconds(60), "a minute ago"),
            (Duration::minutes(5), "5 minutes ago"),
            (Duration::minutes(50), "an hour ago"),
            (Duration::hours(3), "3 hours ago"),
            (Duration::hours(23), "a day ago"),
            (Duration::days(4), "4 days ago"),
            (Duration::days(30), "a month ago"),
            (Duration::days(95), "3 months ago"),
            (Duration::days(340), "a year ago"),
            (Duration::days(365 * 3), "3 years ago"),
        ];
        for (ago, expected) in cases {
            assert_eq!(RelativeTime::between(now() - ago, now()), expected, "{ago:?}");
        }
    }

    #[test]
    fn phrases_future_distances() {
        assert_eq!(RelativeTime::between(now() + Duration::hours(2), now()), "in 2 hours");
    }

    #[test]
    fn formats_backend_timestamps() {
        let formatter = RelativeTime::at(now());
        assert_eq!(formatter.format("2024-09-14T08:26:06.070Z"), "an hour ago");
        assert_eq!(formatter.format("2024-09-14T08:26:06"), "an hour ago");
        assert_eq!(formatter.format("2024-09-10"), "4 days ago");
    }

    #[test]
    fn unparseable_input_is_reported() {
        let formatter = RelativeTime::at(now());
        assert_eq!(formatter.format("yesterday"), "Invalid date");
        assert_eq!(formatter.format(""), "Invalid date");
    }
}
