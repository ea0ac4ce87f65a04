use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged occurrence of a habit. Entries are only ever created, comment-edited,
/// or deleted individually; the timestamp records the instant of logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// All activity for one habit on one calendar day.
///
/// A log only exists while it has at least one entry: it is created lazily on
/// the first activity of the day and removed when the last entry is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitLog {
    /// Composite key, `"{habit_id}-{date}"` — unique per `(habit_id, date)` pair.
    pub id: String,
    pub habit_id: Uuid,
    /// Calendar day as a date-only value; serializes as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Entries in logging order.
    pub activities: Vec<ActivityEntry>,
}

impl HabitLog {
    pub fn log_id(habit_id: Uuid, date: NaiveDate) -> String {
        format!("{habit_id}-{date}")
    }
}
