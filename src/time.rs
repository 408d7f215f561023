//! Relative Time
//!
//! Human wording for the distance between two instants
//! ("about 3 hours", "over 6 years").

use chrono::{DateTime, Datelike, Utc};

const MINUTES_IN_DAY: f64 = 1440.0;
const MINUTES_IN_MONTH: f64 = 43200.0;
const MINUTES_IN_TWO_MONTHS: f64 = 86400.0;

fn plural(count: i64, one: &str, many: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        many.replace("{}", &count.to_string())
    }
}

/// Calendar months between two instants, not counting a partial last month
fn whole_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());
    if (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months.max(0)
}

/// Distance between two instants, order-independent.
pub fn format_distance(a: DateTime<Utc>, b: DateTime<Utc>) -> String {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    let seconds = (later - earlier).num_seconds() as f64;
    let minutes = (seconds / 60.0).round();

    if minutes < 2.0 {
        return if minutes == 0.0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }
    if minutes < 45.0 {
        return format!("{} minutes", minutes as i64);
    }
    if minutes < 90.0 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes / 60.0).round() as i64;
        return format!("about {} hours", hours);
    }
    if minutes < 2520.0 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes / MINUTES_IN_DAY).round() as i64;
        return plural(days, "1 day", "{} days");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes / MINUTES_IN_MONTH).round() as i64;
        return plural(months, "about 1 month", "about {} months");
    }

    let months = whole_months_between(earlier, later);
    if months < 12 {
        let nearest = (minutes / MINUTES_IN_MONTH).round() as i64;
        return plural(nearest, "1 month", "{} months");
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => plural(years, "about 1 year", "about {} years"),
        3..=8 => plural(years, "over 1 year", "over {} years"),
        _ => format!("almost {} years", years + 1),
    }
}

/// "3 days ago" for past instants, "in 3 days" for future ones
pub fn describe_relative(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let distance = format_distance(date, now);
    if date > now {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap()
    }

    fn after(base: DateTime<Utc>, seconds: i64) -> String {
        format_distance(base, base + Duration::seconds(seconds))
    }

    #[test]
    fn test_minutes_and_hours() {
        let base = at(2020, 1, 1);
        assert_eq!(after(base, 20), "less than a minute");
        assert_eq!(after(base, 60), "1 minute");
        assert_eq!(after(base, 90), "2 minutes");
        assert_eq!(after(base, 44 * 60), "44 minutes");
        assert_eq!(after(base, 60 * 60), "about 1 hour");
        assert_eq!(after(base, 3 * 3600), "about 3 hours");
    }

    #[test]
    fn test_days_and_months() {
        let base = at(2020, 1, 1);
        assert_eq!(after(base, 30 * 3600), "1 day");
        assert_eq!(after(base, 10 * 86400), "10 days");
        assert_eq!(after(base, 35 * 86400), "about 1 month");
        assert_eq!(format_distance(at(2020, 1, 1), at(2020, 8, 1)), "7 months");
    }

    #[test]
    fn test_years() {
        assert_eq!(format_distance(at(2010, 6, 4), at(2020, 7, 4)), "about 10 years");
        assert_eq!(format_distance(at(2010, 6, 4), at(2016, 12, 10)), "over 6 years");
        assert_eq!(format_distance(at(2006, 3, 24), at(2020, 1, 1)), "almost 14 years");
        assert_eq!(format_distance(at(2019, 1, 1), at(2020, 1, 2)), "about 1 year");
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(
            format_distance(at(2020, 7, 4), at(2010, 6, 4)),
            format_distance(at(2010, 6, 4), at(2020, 7, 4)),
        );
    }

    #[test]
    fn test_describe_relative_direction() {
        let now = at(2020, 1, 11);
        assert_eq!(describe_relative(at(2020, 1, 1), now), "10 days ago");
        assert_eq!(describe_relative(at(2020, 1, 21), now), "in 10 days");
    }

    #[test]
    fn test_partial_month_not_counted() {
        let earlier = at(2020, 1, 15);
        assert_eq!(whole_months_between(earlier, at(2020, 3, 14)), 1);
        assert_eq!(whole_months_between(earlier, at(2020, 3, 15)), 2);
    }
}
