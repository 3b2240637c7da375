//! Plan-generator output shape.

use crate::model::task::Priority;
use serde::{Deserialize, Serialize};

/// Uncommitted candidate task.
///
/// Same shape as [`crate::Task`] minus identity, completion and timestamp;
/// promoted to a task only when the user accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub note: Option<String>,
    pub priority: Priority,
}
