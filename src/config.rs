use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::habit::Habit;

/// Hard cap on concurrently tracked habits, matching the habit editor's limit.
pub const MAX_HABITS: usize = 15;

/// Palette offered by the color picker. New habits default to the first entry.
pub const PREDEFINED_COLORS: [&str; 18] = [
    "#FF6B6B", "#FFD166", "#06D6A0", "#118AB2", "#073B4C", "#EF476F",
    "#F94144", "#F3722C", "#F8961E", "#F9C74F", "#90BE6D", "#43AA8B",
    "#577590", "#277DA1", "#6A0DAD", "#C3A1FF", "#FF7F50", "#FFBF00",
];

/// Icon key assigned when a habit is created without one.
pub const DEFAULT_SYMBOL: &str = "ThumbsUp";

#[derive(Debug, Clone)]
pub struct Config {
    pub max_habits: usize,
    pub default_color: String,
    pub default_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_habits: MAX_HABITS,
            default_color: PREDEFINED_COLORS[0].into(),
            default_symbol: DEFAULT_SYMBOL.into(),
        }
    }
}

/// Starter habits seeded into a store that has never held any data.
pub fn default_habits(now: DateTime<Utc>) -> Vec<Habit> {
    vec![
        Habit {
            id: Uuid::new_v4(),
            name: "Morning Exercise".into(),
            color: PREDEFINED_COLORS[2].into(),
            symbol: "Dumbbell".into(),
            is_negative: false,
            created_at: now,
        },
        Habit {
            id: Uuid::new_v4(),
            name: "Read 30 Mins".into(),
            color: PREDEFINED_COLORS[3].into(),
            symbol: "BookOpen".into(),
            is_negative: false,
            created_at: now,
        },
        Habit {
            id: Uuid::new_v4(),
            name: "Avoid Junk Food".into(),
            color: PREDEFINED_COLORS[0].into(),
            symbol: "XCircle".into(),
            is_negative: true,
            created_at: now,
        },
    ]
}
