//! Filter and sort rules for the task list.
//!
//! # Invariants
//! - Incomplete tasks always precede completed ones, in every sort mode.
//! - Sorting is stable, so equal keys keep storage order.

use crate::model::task::Task;
use std::cmp::{Ordering, Reverse};
use std::fmt::{Display, Formatter};

/// Which tasks the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Placeholder text shown when the filtered list is empty.
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Active => "All tasks are completed! 🎉",
            Self::Completed => "No completed tasks yet.",
            Self::All => "No tasks yet — start planning your day!",
        }
    }
}

impl Display for TaskFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the filtered list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Grouped by priority, newest first inside a group.
    #[default]
    Priority,
    Newest,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Newest => "newest",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "priority" => Some(Self::Priority),
            "newest" => Some(Self::Newest),
            _ => None,
        }
    }

    fn compare(self, a: &Task, b: &Task) -> Ordering {
        let by_status = a.completed.cmp(&b.completed);
        let by_newest = Reverse(a.created_at).cmp(&Reverse(b.created_at));
        match self {
            Self::Priority => by_status
                .then_with(|| a.priority.rank().cmp(&b.priority.rank()))
                .then(by_newest),
            Self::Newest => by_status.then(by_newest),
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects tasks matching `filter` and orders them for display.
pub fn filter_and_sort(tasks: &[Task], filter: TaskFilter, sort: SortMode) -> Vec<&Task> {
    let mut visible: Vec<&Task> = tasks.iter().filter(|task| filter.matches(task)).collect();
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}
