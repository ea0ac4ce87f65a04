pub mod calendar;
pub mod chart;
pub mod period;
pub mod streak;

use calendar::{DateWindow, Period};
use period::{DailyActivityCount, PeriodStats};

/// Pick the chart series for a period the way the dashboard does: weekly views
/// chart raw daily counts, monthly views compress to weekly groups, and
/// quarterly/annual views compress to calendar months.
///
/// Returns `None` when the stats were computed without a day-label formatter.
pub fn chart_series(
    stats: &PeriodStats,
    period: Period,
    window: &DateWindow,
) -> Option<Vec<DailyActivityCount>> {
    let daily = stats.daily_activity_counts.as_ref()?;
    let series = match period {
        Period::Week => daily.clone(),
        Period::Month => chart::aggregate_daily_to_weekly(daily),
        Period::Quarter | Period::Year => chart::aggregate_daily_to_monthly(daily, window.start),
    };
    Some(series)
}
