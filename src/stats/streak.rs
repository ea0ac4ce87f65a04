use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::models::habit::Habit;
use crate::models::log::HabitLog;

/// How far back the streak scan walks, in days.
///
/// Two years bounds the work per call, but it also caps the result: a habit
/// whose true streak exceeds this horizon (only possible for a negative habit
/// left unlogged since before the bound) reports exactly this many days.
pub const STREAK_SCAN_DAYS: i64 = 365 * 2;

/// Consecutive successful days ending at (and including) `today`.
///
/// A day succeeds when the habit has at least one logged activity (positive
/// habits) or none at all (negative habits). The walk stops at the first
/// unsuccessful day, which is not counted. Logs dated after `today` are
/// ignored.
pub fn calculate_streak(habit: &Habit, logs: &[HabitLog], today: NaiveDate) -> u32 {
    let logged_dates: HashSet<NaiveDate> = logs
        .iter()
        .filter(|log| log.habit_id == habit.id && !log.activities.is_empty() && log.date <= today)
        .map(|log| log.date)
        .collect();

    let mut streak = 0;
    for offset in 0..STREAK_SCAN_DAYS {
        let day = today - Duration::days(offset);
        let success = if habit.is_negative {
            !logged_dates.contains(&day)
        } else {
            logged_dates.contains(&day)
        };
        if !success {
            break;
        }
        streak += 1;
    }
    streak
}
