//! Plain-data export for the external insights collaborator.
//!
//! The generative-AI call itself lives outside this crate; the host sends it
//! the per-habit summaries assembled here.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::habit::Habit;
use crate::models::log::HabitLog;
use crate::stats::streak::calculate_streak;

/// One day's activity condensed for the insights prompt: how many times the
/// habit was logged, plus a representative comment (the day's last non-blank
/// one).
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Everything the insights collaborator needs to know about one habit.
#[derive(Debug, Clone, Serialize)]
pub struct HabitInsightData {
    pub name: String,
    pub is_negative: bool,
    /// Logged days in chronological order.
    pub activities: Vec<DaySummary>,
    pub streak: u32,
}

/// Assemble per-habit summaries for the insights collaborator. One entry per
/// habit regardless of activity, so the consumer sees untouched habits too.
pub fn prepare_insight_data(
    habits: &[Habit],
    logs: &[HabitLog],
    today: NaiveDate,
) -> Vec<HabitInsightData> {
    habits
        .iter()
        .map(|habit| {
            let mut activities: Vec<DaySummary> = logs
                .iter()
                .filter(|log| log.habit_id == habit.id && !log.activities.is_empty())
                .map(|log| DaySummary {
                    date: log.date,
                    count: log.activities.len() as u32,
                    comment: log
                        .activities
                        .iter()
                        .rev()
                        .find_map(|a| match a.comment.as_deref() {
                            Some(c) if !c.trim().is_empty() => Some(c.to_string()),
                            _ => None,
                        }),
                })
                .collect();
            activities.sort_by_key(|day| day.date);

            HabitInsightData {
                name: habit.name.clone(),
                is_negative: habit.is_negative,
                activities,
                streak: calculate_streak(habit, logs, today),
            }
        })
        .collect()
}

/// Whether any habit has at least one logged day. The host checks this before
/// making the external call, since an all-empty export produces nothing useful.
pub fn has_activity_data(data: &[HabitInsightData]) -> bool {
    data.iter().any(|habit| !habit.activities.is_empty())
}
