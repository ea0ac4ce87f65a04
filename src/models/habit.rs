use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    /// Hex color code (e.g., "#06D6A0") used for visual identification.
    pub color: String,
    /// Icon key resolved by the host's icon registry (e.g., "Dumbbell").
    pub symbol: String,
    /// True for habits to avoid: a day with no logged activity counts as success.
    pub is_negative: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateHabitRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    /// Hex color code. Default: first predefined color.
    pub color: Option<String>,

    /// Icon key. Default: "ThumbsUp".
    pub symbol: Option<String>,

    /// Default: false
    pub is_negative: Option<bool>,
}

/// Partial update, all fields optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateHabitRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    pub color: Option<String>,
    pub symbol: Option<String>,
    pub is_negative: Option<bool>,
}
