//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted in the key-value slot.
//! - Normalize user input (trimmed title, optional note) at construction.
//!
//! # Invariants
//! - `id` is unique within one collection and never reused.
//! - `title` is non-empty after trimming.
//! - A task is only mutated by toggling `completed`; deletion ends its life.
//!
//! # See also
//! - model::suggestion for the uncommitted plan-generator shape.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque task identifier.
///
/// New tasks get a UUID v4 string, but persisted collections may carry any
/// non-empty string, so the type stays a plain `String`.
pub type TaskId = String;

/// Task urgency used for sorting and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    /// Form default.
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// All priorities in display (rank) order.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort rank: high < medium < low.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Stable lowercase label used on the wire and in UI badges.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Parses a case-insensitive priority label.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Identifier is empty.
    EmptyId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::EmptyId => write!(f, "task id cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Empty strings on the wire are read back as `None`.
    #[serde(default, deserialize_with = "deserialize_note")]
    pub note: Option<String>,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates a new incomplete task with a generated id.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is blank.
    pub fn new(
        title: &str,
        priority: Priority,
        note: Option<&str>,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4().to_string(), title, priority, note, created_at)
    }

    /// Creates a task with a caller-provided identifier.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: impl Into<TaskId>,
        title: &str,
        priority: Priority,
        note: Option<&str>,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id: id.into(),
            title: title.trim().to_string(),
            note: normalize_note(note),
            priority,
            completed: false,
            created_at,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Trims a note and maps blank input to `None`.
pub fn normalize_note(note: Option<&str>) -> Option<String> {
    note.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn deserialize_note<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_note(raw.as_deref()))
}
