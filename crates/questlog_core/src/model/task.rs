//! Task domain model.
//!
//! # Responsibility
//! - Define the daily and one-time task records tracked by the quest log.
//! - Provide the difficulty tier classification that drives base XP.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - A daily task survives completion; a one-time task is consumed by it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task within its own collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Difficulty classification controlling the base XP award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// Parses user-supplied tier input.
    ///
    /// Unknown values fall back to `Easy`, the lowest-paying tier, so
    /// malformed form input can never inflate an award.
    pub fn parse_or_easy(value: &str) -> Self {
        match value {
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Easy,
        }
    }

    /// Returns the wire/display name of this tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Recurring task with a per-day completion flag.
///
/// The `done` flag is presentation state for the current day; the daily
/// reset clears it, while `last_completed_date` is what guards against
/// double awards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTask {
    /// Stable task id.
    pub id: TaskId,
    /// User-entered task description.
    pub text: String,
    /// Difficulty tier chosen at creation time.
    pub tier: Tier,
    /// Day of the most recent XP-granting completion.
    pub last_completed_date: Option<NaiveDate>,
    /// Whether the task is checked off for the current day.
    pub done: bool,
}

impl DailyTask {
    /// Creates a new daily task with a generated stable id.
    ///
    /// # Invariants
    /// - `done` starts as `false`.
    /// - `last_completed_date` starts unset.
    pub fn new(text: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            tier,
            last_completed_date: None,
            done: false,
        }
    }
}

/// Single-shot task removed from the backlog when completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeTask {
    /// Stable task id.
    pub id: TaskId,
    /// User-entered task description.
    pub text: String,
    /// Difficulty tier chosen at creation time.
    pub tier: Tier,
    /// Day the task was filed.
    pub created_date: NaiveDate,
}

impl OneTimeTask {
    /// Creates a new one-time task stamped with its creation day.
    pub fn new(text: impl Into<String>, tier: Tier, created_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            tier,
            created_date,
        }
    }
}
