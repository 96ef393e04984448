use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

/// Inclusive [start, end] of an ISO week (Monday through Sunday 23:59:59),
/// in UTC. `None` when the year/week pair does not exist.
pub fn week_range(year: i32, week: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?;
    range_over_days(start, 6)
}

/// Inclusive [start, end] of a calendar month, in UTC.
pub fn month_range(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let days = (next_month - start).num_days() - 1;
    range_over_days(start, days)
}

/// The week containing today.
pub fn current_week_range() -> (DateTime<Utc>, DateTime<Utc>) {
    let today = Utc::now().date_naive();
    let start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    range_over_days(start, 6).unwrap_or_else(|| {
        // Unreachable for any date chrono can represent.
        let now = Utc::now();
        (now, now)
    })
}

fn range_over_days(start: NaiveDate, days: i64) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start_at = start.and_hms_opt(0, 0, 0)?.and_utc();
    let end_at = (start + Duration::days(days)).and_hms_opt(23, 59, 59)?.and_utc();
    Some((start_at, end_at))
}
