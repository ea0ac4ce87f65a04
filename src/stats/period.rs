use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::models::habit::Habit;
use crate::models::log::HabitLog;
use crate::stats::calendar::DateWindow;

/// One habit's completion summary over a period.
#[derive(Debug, Clone, Serialize)]
pub struct HabitCompletionRate {
    pub habit_id: Uuid,
    pub name: String,
    pub color: String,
    pub symbol: String,
    /// Percentage 0-100: `successful_days / total_days_in_period * 100`.
    pub rate: f64,
    pub successful_days: u32,
    pub total_days_in_period: u32,
}

/// A chart point: label plus the number of habits successful on that day
/// (or, after re-bucketing, in that week/month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyActivityCount {
    pub date_label: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodStats {
    pub overall_completion_rate: f64,
    pub habit_completion_rates: Vec<HabitCompletionRate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_activity_counts: Option<Vec<DailyActivityCount>>,
    pub period_label: String,
    pub total_habits_tracked: usize,
    pub total_successful_habit_days: u32,
    pub total_possible_habit_days: u32,
}

fn is_successful(is_negative: bool, has_activity: bool) -> bool {
    if is_negative {
        !has_activity
    } else {
        has_activity
    }
}

/// Per-habit and overall completion statistics over a date window.
///
/// Each day is classified independently (no consecutiveness requirement):
/// success means at least one logged activity for positive habits, none for
/// negative ones. `day_label`, when supplied, also yields a per-day series
/// counting how many habits succeeded on each date of the window.
///
/// Degenerate inputs (no habits, empty window) produce zeroed totals rather
/// than an error; the overall rate never divides by zero.
pub fn calculate_period_stats(
    habits: &[Habit],
    logs: &[HabitLog],
    window: &DateWindow,
    period_label: &str,
    day_label: Option<&dyn Fn(NaiveDate) -> String>,
) -> PeriodStats {
    if habits.is_empty() || window.dates.is_empty() {
        return PeriodStats {
            overall_completion_rate: 0.0,
            habit_completion_rates: Vec::new(),
            daily_activity_counts: day_label.map(|label| {
                window
                    .dates
                    .iter()
                    .map(|&d| DailyActivityCount {
                        date_label: label(d),
                        count: 0,
                    })
                    .collect()
            }),
            period_label: period_label.to_string(),
            total_habits_tracked: habits.len(),
            total_successful_habit_days: 0,
            total_possible_habit_days: 0,
        };
    }

    // Days that actually carry activity, keyed per habit.
    let logged: HashSet<(Uuid, NaiveDate)> = logs
        .iter()
        .filter(|log| !log.activities.is_empty())
        .map(|log| (log.habit_id, log.date))
        .collect();

    let window_len = window.dates.len() as u32;
    let mut total_successful_habit_days = 0;
    let total_possible_habit_days = habits.len() as u32 * window_len;

    let habit_completion_rates: Vec<HabitCompletionRate> = habits
        .iter()
        .map(|habit| {
            let successful_days = window
                .dates
                .iter()
                .filter(|&&d| is_successful(habit.is_negative, logged.contains(&(habit.id, d))))
                .count() as u32;
            total_successful_habit_days += successful_days;
            HabitCompletionRate {
                habit_id: habit.id,
                name: habit.name.clone(),
                color: habit.color.clone(),
                symbol: habit.symbol.clone(),
                rate: f64::from(successful_days) / f64::from(window_len) * 100.0,
                successful_days,
                total_days_in_period: window_len,
            }
        })
        .collect();

    let overall_completion_rate = if total_possible_habit_days > 0 {
        f64::from(total_successful_habit_days) / f64::from(total_possible_habit_days) * 100.0
    } else {
        0.0
    };

    let daily_activity_counts = day_label.map(|label| {
        window
            .dates
            .iter()
            .map(|&d| DailyActivityCount {
                date_label: label(d),
                count: habits
                    .iter()
                    .filter(|h| is_successful(h.is_negative, logged.contains(&(h.id, d))))
                    .count() as u32,
            })
            .collect()
    });

    PeriodStats {
        overall_completion_rate,
        habit_completion_rates,
        daily_activity_counts,
        period_label: period_label.to_string(),
        total_habits_tracked: habits.len(),
        total_successful_habit_days,
        total_possible_habit_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::log::ActivityEntry;
    use crate::stats::calendar::{week_window, weekday_label};
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(name: &str, is_negative: bool) -> Habit {
        Habit {
            id: Uuid::new_v4(),
            name: name.into(),
            color: "#06D6A0".into(),
            symbol: "Dumbbell".into(),
            is_negative,
            created_at: Utc::now(),
        }
    }

    fn log_on(habit_id: Uuid, day: NaiveDate) -> HabitLog {
        HabitLog {
            id: HabitLog::log_id(habit_id, day),
            habit_id,
            date: day,
            activities: vec![ActivityEntry {
                id: Uuid::new_v4(),
                timestamp: Utc::now(),
                comment: None,
            }],
        }
    }

    // ── degenerate inputs ────────────────────────────────────────────────

    #[test]
    fn test_no_habits_yields_zeroed_stats() {
        let window = week_window(date(2026, 2, 11));
        let stats = calculate_period_stats(&[], &[], &window, "This Week", None);
        assert_eq!(stats.overall_completion_rate, 0.0);
        assert_eq!(stats.total_possible_habit_days, 0);
        assert_eq!(stats.total_successful_habit_days, 0);
        assert!(stats.habit_completion_rates.is_empty());
        assert!(stats.daily_activity_counts.is_none());
    }

    #[test]
    fn test_no_habits_with_formatter_still_emits_zero_series() {
        let window = week_window(date(2026, 2, 11));
        let stats =
            calculate_period_stats(&[], &[], &window, "This Week", Some(&weekday_label));
        let daily = stats.daily_activity_counts.unwrap();
        assert_eq!(daily.len(), 7);
        assert!(daily.iter().all(|d| d.count == 0));
        assert_eq!(daily[0].date_label, "Mon");
    }

    #[test]
    fn test_empty_window_yields_zeroed_stats() {
        let window = DateWindow {
            dates: vec![],
            start: date(2026, 2, 9),
            end: date(2026, 2, 9),
        };
        let habits = vec![habit("Exercise", false)];
        let stats = calculate_period_stats(&habits, &[], &window, "This Week", None);
        assert_eq!(stats.overall_completion_rate, 0.0);
        assert_eq!(stats.total_possible_habit_days, 0);
        assert!(stats.habit_completion_rates.is_empty());
        assert_eq!(stats.total_habits_tracked, 1);
    }

    // ── per-habit rates ──────────────────────────────────────────────────

    #[test]
    fn test_positive_habit_with_no_logs_scores_zero() {
        let habits = vec![habit("Exercise", false)];
        let window = week_window(date(2026, 2, 11));
        let stats = calculate_period_stats(&habits, &[], &window, "This Week", None);
        assert_eq!(stats.overall_completion_rate, 0.0);
        let hr = &stats.habit_completion_rates[0];
        assert_eq!(hr.successful_days, 0);
        assert_eq!(hr.rate, 0.0);
        assert_eq!(hr.total_days_in_period, 7);
        assert_eq!(stats.total_possible_habit_days, 7);
    }

    #[test]
    fn test_positive_habit_logged_every_day_scores_100() {
        let h = habit("Exercise", false);
        let window = week_window(date(2026, 2, 11));
        let logs: Vec<HabitLog> = window.dates.iter().map(|&d| log_on(h.id, d)).collect();
        let habits = vec![h];
        let stats = calculate_period_stats(&habits, &logs, &window, "This Week", None);
        let hr = &stats.habit_completion_rates[0];
        assert_eq!(hr.rate, 100.0);
        assert_eq!(hr.successful_days, 7);
        assert_eq!(stats.overall_completion_rate, 100.0);
        assert_eq!(stats.total_successful_habit_days, 7);
    }

    #[test]
    fn test_rate_is_fraction_of_whole_window() {
        let h = habit("Exercise", false);
        let window = week_window(date(2026, 2, 11));
        // 3 of 7 days logged.
        let logs: Vec<HabitLog> = window.dates[..3].iter().map(|&d| log_on(h.id, d)).collect();
        let habits = vec![h];
        let stats = calculate_period_stats(&habits, &logs, &window, "This Week", None);
        let hr = &stats.habit_completion_rates[0];
        assert_eq!(hr.successful_days, 3);
        assert!((hr.rate - 3.0 / 7.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_habit_inverts_success() {
        let h = habit("Avoid Junk Food", true);
        let window = week_window(date(2026, 2, 11));
        // One slip during the week: 6 of 7 days succeed.
        let logs = vec![log_on(h.id, window.dates[2])];
        let habits = vec![h];
        let stats = calculate_period_stats(&habits, &logs, &window, "This Week", None);
        assert_eq!(stats.habit_completion_rates[0].successful_days, 6);
    }

    #[test]
    fn test_logs_with_no_activities_count_as_unlogged() {
        let h = habit("Exercise", false);
        let window = week_window(date(2026, 2, 11));
        let mut log = log_on(h.id, window.dates[0]);
        log.activities.clear();
        let habits = vec![h];
        let stats = calculate_period_stats(&habits, &[log], &window, "This Week", None);
        assert_eq!(stats.habit_completion_rates[0].successful_days, 0);
    }

    #[test]
    fn test_logs_outside_window_are_ignored() {
        let h = habit("Exercise", false);
        let window = week_window(date(2026, 2, 11));
        let logs = vec![log_on(h.id, date(2026, 1, 1))];
        let habits = vec![h];
        let stats = calculate_period_stats(&habits, &logs, &window, "This Week", None);
        assert_eq!(stats.habit_completion_rates[0].successful_days, 0);
    }

    // ── aggregate totals & daily series ──────────────────────────────────

    #[test]
    fn test_overall_rate_spans_all_habits() {
        let pos = habit("Exercise", false);
        let neg = habit("Avoid Junk Food", true);
        let window = week_window(date(2026, 2, 11));
        // Positive habit logged 7/7, negative habit untouched (7/7 clean).
        let logs: Vec<HabitLog> = window.dates.iter().map(|&d| log_on(pos.id, d)).collect();
        let habits = vec![pos, neg];
        let stats = calculate_period_stats(&habits, &logs, &window, "This Week", None);
        assert_eq!(stats.total_possible_habit_days, 14);
        assert_eq!(stats.total_successful_habit_days, 14);
        assert_eq!(stats.overall_completion_rate, 100.0);
        assert_eq!(stats.total_habits_tracked, 2);
    }

    #[test]
    fn test_daily_series_counts_habits_per_date() {
        let pos = habit("Exercise", false);
        let neg = habit("Avoid Junk Food", true);
        let window = week_window(date(2026, 2, 11));
        // Positive logged Monday only; negative slips on Tuesday.
        let logs = vec![log_on(pos.id, window.dates[0]), log_on(neg.id, window.dates[1])];
        let habits = vec![pos, neg];
        let stats =
            calculate_period_stats(&habits, &logs, &window, "This Week", Some(&weekday_label));
        let daily = stats.daily_activity_counts.unwrap();
        assert_eq!(daily.len(), 7);
        // Monday: both succeed (logged + clean). Tuesday: both fail.
        assert_eq!(daily[0], DailyActivityCount { date_label: "Mon".into(), count: 2 });
        assert_eq!(daily[1], DailyActivityCount { date_label: "Tue".into(), count: 0 });
        // Rest of the week: only the negative habit succeeds.
        assert!(daily[2..].iter().all(|d| d.count == 1));
    }

    #[test]
    fn test_period_label_is_carried_through() {
        let window = week_window(date(2026, 2, 11));
        let stats = calculate_period_stats(&[], &[], &window, "This Week", None);
        assert_eq!(stats.period_label, "This Week");
    }

    #[test]
    fn test_stats_serialize_without_daily_counts_field_when_absent() {
        let window = week_window(date(2026, 2, 11));
        let stats = calculate_period_stats(&[], &[], &window, "This Week", None);
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("daily_activity_counts").is_none());
        assert_eq!(json["period_label"], "This Week");
    }
}
