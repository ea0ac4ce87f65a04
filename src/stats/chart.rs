use chrono::{Datelike, Duration, NaiveDate};

use crate::stats::period::DailyActivityCount;

/// Compress a daily series into positional groups of 7, labeled "Week 1",
/// "Week 2", … in order. The last group may be shorter.
///
/// Bucketing is by index, not calendar week: a month that does not start on a
/// Monday will not align groups to real weeks.
pub fn aggregate_daily_to_weekly(daily: &[DailyActivityCount]) -> Vec<DailyActivityCount> {
    daily
        .chunks(7)
        .enumerate()
        .map(|(i, week)| DailyActivityCount {
            date_label: format!("Week {}", i + 1),
            count: week.iter().map(|d| d.count).sum(),
        })
        .collect()
}

/// Compress a daily series into calendar months, labeled by short month name
/// ("Jan") in chronological order.
///
/// Entries must correspond 1:1, in order, to consecutive calendar days
/// starting at `period_start`; the walk advances one day per entry and opens a
/// new bucket at each month crossing.
pub fn aggregate_daily_to_monthly(
    daily: &[DailyActivityCount],
    period_start: NaiveDate,
) -> Vec<DailyActivityCount> {
    let mut buckets: Vec<DailyActivityCount> = Vec::new();
    let mut current_month = None;
    for (i, point) in daily.iter().enumerate() {
        let day = period_start + Duration::days(i as i64);
        let month = (day.year(), day.month());
        if current_month != Some(month) {
            current_month = Some(month);
            buckets.push(DailyActivityCount {
                date_label: day.format("%b").to_string(),
                count: 0,
            });
        }
        if let Some(bucket) = buckets.last_mut() {
            bucket.count += point.count;
        }
    }
    buckets
}
