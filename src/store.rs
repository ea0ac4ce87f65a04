//! Single-writer owner of the habit/log collections.
//!
//! The statistics functions in [`crate::stats`] only ever read snapshots of
//! this data; all mutation goes through [`HabitStore`], which maintains two
//! invariants the rest of the crate relies on:
//!
//! - deleting a habit deletes every log that references it (no orphans), and
//! - a log never persists with zero activity entries — it is created lazily on
//!   the first entry of a `(habit, day)` pair and removed with the last one.
//!
//! Persistence is a host concern behind [`Repository`]; the store itself never
//! touches a backend.

use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::config::{self, Config};
use crate::error::{AppError, AppResult};
use crate::models::habit::{CreateHabitRequest, Habit, UpdateHabitRequest};
use crate::models::log::{ActivityEntry, HabitLog};
use crate::stats::streak::calculate_streak;

/// Upper bound on activity comment length.
pub const MAX_COMMENT_LEN: usize = 5000;

/// Where a store's contents are loaded from and saved to. Backend errors are
/// opaque to the core.
pub trait Repository {
    fn load(&self) -> anyhow::Result<Snapshot>;
    fn save(&self, snapshot: &Snapshot) -> anyhow::Result<()>;
}

/// The full persisted state: every habit and every non-empty log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub habits: Vec<Habit>,
    pub logs: Vec<HabitLog>,
}

impl Snapshot {
    /// Serialize for a JSON-backed repository.
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| AppError::Storage(e.into()))
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Storage(e.into()))
    }
}

/// In-memory repository for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    snapshot: Mutex<Snapshot>,
}

impl Repository for MemoryRepository {
    fn load(&self) -> anyhow::Result<Snapshot> {
        let guard = self
            .snapshot
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot lock poisoned"))?;
        *guard = snapshot.clone();
        Ok(())
    }
}

#[derive(Debug)]
pub struct HabitStore {
    habits: Vec<Habit>,
    logs: Vec<HabitLog>,
    config: Config,
}

impl HabitStore {
    pub fn new(config: Config) -> Self {
        Self {
            habits: Vec::new(),
            logs: Vec::new(),
            config,
        }
    }

    pub fn from_snapshot(snapshot: Snapshot, config: Config) -> Self {
        Self {
            habits: snapshot.habits,
            logs: snapshot.logs,
            config,
        }
    }

    pub fn load(repository: &dyn Repository, config: Config) -> AppResult<Self> {
        let snapshot = repository.load()?;
        tracing::debug!(
            habits = snapshot.habits.len(),
            logs = snapshot.logs.len(),
            "Store loaded"
        );
        Ok(Self::from_snapshot(snapshot, config))
    }

    pub fn persist(&self, repository: &dyn Repository) -> AppResult<()> {
        repository.save(&self.snapshot())?;
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            habits: self.habits.clone(),
            logs: self.logs.clone(),
        }
    }

    /// Seed the starter habits into a store that has never held any data.
    /// No-op when any habit already exists.
    pub fn seed_default_habits(&mut self, now: DateTime<Utc>) {
        if self.habits.is_empty() {
            self.habits = config::default_habits(now);
            tracing::info!(count = self.habits.len(), "Seeded starter habits");
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn logs(&self) -> &[HabitLog] {
        &self.logs
    }

    pub fn habit(&self, habit_id: Uuid) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == habit_id)
    }

    // ── habits ───────────────────────────────────────────────────────────

    pub fn add_habit(&mut self, req: CreateHabitRequest, now: DateTime<Utc>) -> AppResult<Habit> {
        req.validate()?;
        if self.habits.len() >= self.config.max_habits {
            return Err(AppError::LimitExceeded(self.config.max_habits));
        }

        let habit = Habit {
            id: Uuid::new_v4(),
            name: req.name,
            color: req
                .color
                .unwrap_or_else(|| self.config.default_color.clone()),
            symbol: req
                .symbol
                .unwrap_or_else(|| self.config.default_symbol.clone()),
            is_negative: req.is_negative.unwrap_or(false),
            created_at: now,
        };
        tracing::info!(habit_id = %habit.id, name = %habit.name, "Habit created");
        self.habits.push(habit.clone());
        Ok(habit)
    }

    pub fn update_habit(&mut self, habit_id: Uuid, req: UpdateHabitRequest) -> AppResult<Habit> {
        req.validate()?;
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == habit_id)
            .ok_or_else(|| AppError::NotFound(format!("Habit {habit_id} not found")))?;

        if let Some(name) = req.name {
            habit.name = name;
        }
        if let Some(color) = req.color {
            habit.color = color;
        }
        if let Some(symbol) = req.symbol {
            habit.symbol = symbol;
        }
        if let Some(is_negative) = req.is_negative {
            habit.is_negative = is_negative;
        }
        Ok(habit.clone())
    }

    /// Delete a habit and every log that references it.
    pub fn delete_habit(&mut self, habit_id: Uuid) -> AppResult<()> {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != habit_id);
        if self.habits.len() == before {
            return Err(AppError::NotFound(format!("Habit {habit_id} not found")));
        }

        let logs_before = self.logs.len();
        self.logs.retain(|log| log.habit_id != habit_id);
        tracing::info!(
            habit_id = %habit_id,
            removed_logs = logs_before - self.logs.len(),
            "Habit deleted"
        );
        Ok(())
    }

    // ── activity logs ────────────────────────────────────────────────────

    /// Record one occurrence of a habit on a day, creating the day's log if
    /// this is its first entry.
    pub fn log_activity(
        &mut self,
        habit_id: Uuid,
        date: NaiveDate,
        comment: Option<String>,
        now: DateTime<Utc>,
    ) -> AppResult<ActivityEntry> {
        if self.habit(habit_id).is_none() {
            return Err(AppError::NotFound(format!("Habit {habit_id} not found")));
        }
        if let Some(comment) = &comment {
            if comment.chars().count() > MAX_COMMENT_LEN {
                return Err(AppError::Validation(format!(
                    "Comment must be under {MAX_COMMENT_LEN} characters"
                )));
            }
        }

        let entry = ActivityEntry {
            id: Uuid::new_v4(),
            timestamp: now,
            comment,
        };
        let log_id = HabitLog::log_id(habit_id, date);
        match self.logs.iter_mut().find(|log| log.id == log_id) {
            Some(log) => log.activities.push(entry.clone()),
            None => self.logs.push(HabitLog {
                id: log_id,
                habit_id,
                date,
                activities: vec![entry.clone()],
            }),
        }
        tracing::debug!(habit_id = %habit_id, date = %date, "Activity logged");
        Ok(entry)
    }

    /// Remove one entry. Idempotent: a missing log or entry is not an error.
    /// The day's log is removed along with its last entry.
    pub fn delete_activity(&mut self, habit_id: Uuid, date: NaiveDate, entry_id: Uuid) {
        let log_id = HabitLog::log_id(habit_id, date);
        if let Some(log) = self.logs.iter_mut().find(|log| log.id == log_id) {
            log.activities.retain(|a| a.id != entry_id);
        }
        self.logs
            .retain(|log| !(log.habit_id == habit_id && log.activities.is_empty()));
        tracing::debug!(habit_id = %habit_id, date = %date, "Activity deleted");
    }

    pub fn update_activity_comment(
        &mut self,
        habit_id: Uuid,
        date: NaiveDate,
        entry_id: Uuid,
        comment: String,
    ) -> AppResult<()> {
        if comment.chars().count() > MAX_COMMENT_LEN {
            return Err(AppError::Validation(format!(
                "Comment must be under {MAX_COMMENT_LEN} characters"
            )));
        }
        let log_id = HabitLog::log_id(habit_id, date);
        let entry = self
            .logs
            .iter_mut()
            .find(|log| log.id == log_id)
            .and_then(|log| log.activities.iter_mut().find(|a| a.id == entry_id))
            .ok_or_else(|| AppError::NotFound(format!("Activity entry {entry_id} not found")))?;
        entry.comment = Some(comment);
        Ok(())
    }

    pub fn log_for_day(&self, habit_id: Uuid, date: NaiveDate) -> Option<&HabitLog> {
        let log_id = HabitLog::log_id(habit_id, date);
        self.logs.iter().find(|log| log.id == log_id)
    }

    /// Entries for a `(habit, day)` pair; empty when no log exists.
    pub fn activities_for_day(&self, habit_id: Uuid, date: NaiveDate) -> &[ActivityEntry] {
        self.log_for_day(habit_id, date)
            .map(|log| log.activities.as_slice())
            .unwrap_or(&[])
    }

    /// Current streak for a habit; an unknown id reports 0.
    pub fn streak(&self, habit_id: Uuid, today: NaiveDate) -> u32 {
        match self.habit(habit_id) {
            Some(habit) => calculate_streak(habit, &self.logs, today),
            None => 0,
        }
    }
}
