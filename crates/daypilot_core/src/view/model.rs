//! Pure view-model derivation for the dashboard and the task list.
//!
//! # Responsibility
//! - Map the task collection plus filter/sort modes to display data.
//! - Keep presentation decisions (grouping, empty messages) out of UI hosts.
//!
//! # Invariants
//! - Derivation never mutates or reorders the stored collection.
//! - Priority groups appear in high/medium/low order and are never empty.

use crate::model::task::{Priority, Task, TaskId};
use crate::view::ordering::{filter_and_sort, SortMode, TaskFilter};
use chrono::NaiveDate;
use serde::Serialize;

/// Progress counters shown above the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// `round(completed / total * 100)`, 0 when there are no tasks.
    pub percent: u8,
}

impl DashboardStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
            percent: percent_complete(completed, total),
        }
    }
}

/// Rounded completion percentage.
pub fn percent_complete(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // Half-up rounding on integers; completed <= total keeps this in 0..=100.
    ((completed * 200 + total) / (total * 2)) as u8
}

/// One rendered task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCard {
    pub id: TaskId,
    pub title: String,
    pub note: Option<String>,
    pub priority: Priority,
    pub completed: bool,
    /// Row is playing its removal fade and will disappear on completion.
    pub fading: bool,
}

impl TaskCard {
    fn from_task(task: &Task, fading_id: Option<&str>) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            note: task.note.clone(),
            priority: task.priority,
            completed: task.completed,
            fading: fading_id == Some(task.id.as_str()),
        }
    }
}

/// Cards sharing one priority, with their header text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityGroup {
    pub priority: Priority,
    pub header: String,
    pub cards: Vec<TaskCard>,
}

/// Body of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskListView {
    Empty { message: String },
    Flat { cards: Vec<TaskCard> },
    Grouped { groups: Vec<PriorityGroup> },
}

impl TaskListView {
    /// Cards in display order, regardless of grouping.
    pub fn cards(&self) -> Vec<&TaskCard> {
        match self {
            Self::Empty { .. } => Vec::new(),
            Self::Flat { cards } => cards.iter().collect(),
            Self::Grouped { groups } => groups.iter().flat_map(|group| &group.cards).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cards().iter().any(|card| card.id == id)
    }
}

/// Builds the list body for the current filter and sort modes.
///
/// `fading_id` marks the row currently playing its removal fade.
pub fn build_task_list(
    tasks: &[Task],
    filter: TaskFilter,
    sort: SortMode,
    fading_id: Option<&str>,
) -> TaskListView {
    let visible = filter_and_sort(tasks, filter, sort);
    if visible.is_empty() {
        return TaskListView::Empty {
            message: filter.empty_message().to_string(),
        };
    }

    match sort {
        SortMode::Newest => TaskListView::Flat {
            cards: visible
                .into_iter()
                .map(|task| TaskCard::from_task(task, fading_id))
                .collect(),
        },
        SortMode::Priority => {
            let groups = Priority::ALL
                .into_iter()
                .filter_map(|priority| {
                    let cards: Vec<TaskCard> = visible
                        .iter()
                        .filter(|task| task.priority == priority)
                        .map(|task| TaskCard::from_task(task, fading_id))
                        .collect();
                    (!cards.is_empty()).then(|| PriorityGroup {
                        priority,
                        header: format!("{priority} priority"),
                        cards,
                    })
                })
                .collect();
            TaskListView::Grouped { groups }
        }
    }
}

/// Formats the header date, e.g. `Friday, October 16`.
pub fn header_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}
