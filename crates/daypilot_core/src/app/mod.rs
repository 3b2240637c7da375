//! Application state shared by UI hosts.
//!
//! # Responsibility
//! - Own the task store together with the transient UI state: filter, sort,
//!   inline form errors, the delete confirmation and the plan flow.
//! - Expose one method per user action and a pure `view_model` projection.
//!
//! # Invariants
//! - Validation failures (empty title, empty goal) change nothing except the
//!   inline error they report.
//! - A confirmed delete is persisted immediately. The removal fade only keeps
//!   a detached copy of the row for drawing, dropped by `finish_fade` or by
//!   the next mutation.

mod plan_flow;

pub use plan_flow::{PlanFlow, PlanStep, PlanView, SuggestionRow};

use crate::model::suggestion::Suggestion;
use crate::model::task::{Priority, Task, TaskId};
use crate::planner::{generate_plan, TimeBudget};
use crate::repo::kv_repo::KvStore;
use crate::service::task_store::{Clock, SystemClock, TaskStore};
use crate::view::model::{build_task_list, header_date, DashboardStats, TaskListView};
use crate::view::ordering::{SortMode, TaskFilter};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Recoverable form validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    EmptyTitle,
    EmptyGoal,
}

impl FormError {
    /// Inline message shown next to the offending input.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyTitle => "Please enter a task title.",
            Self::EmptyGoal => "Please describe your goal.",
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for FormError {}

/// Open delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmPrompt {
    pub task_id: TaskId,
    pub message: String,
}

/// Result of confirming a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The task is deleted and its row keeps fading until `finish_fade`.
    Fading(TaskId),
    /// The row was not visible, so nothing is left to draw.
    Removed(TaskId),
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppViewModel {
    pub header_date: String,
    pub dashboard: DashboardStats,
    pub filter: &'static str,
    pub sort: &'static str,
    pub list: TaskListView,
    pub title_error: Option<String>,
    pub confirm: Option<ConfirmPrompt>,
    pub plan: Option<PlanView>,
}

/// Explicit application state, replacing module-level globals.
pub struct AppState<S: KvStore, C: Clock = SystemClock> {
    store: TaskStore<S, C>,
    filter: TaskFilter,
    sort: SortMode,
    title_error: Option<String>,
    confirm: Option<ConfirmPrompt>,
    fading: Option<Task>,
    plan: Option<PlanFlow>,
}

impl<S: KvStore> AppState<S, SystemClock> {
    /// Loads persisted tasks and starts with default filter and sort.
    pub fn load(storage: S) -> Self {
        Self::new(TaskStore::load(storage))
    }
}

impl<S: KvStore, C: Clock> AppState<S, C> {
    pub fn new(store: TaskStore<S, C>) -> Self {
        Self {
            store,
            filter: TaskFilter::default(),
            sort: SortMode::default(),
            title_error: None,
            confirm: None,
            fading: None,
            plan: None,
        }
    }

    pub fn store(&self) -> &TaskStore<S, C> {
        &self.store
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn title_error(&self) -> Option<&str> {
        self.title_error.as_deref()
    }

    pub fn confirm_prompt(&self) -> Option<&ConfirmPrompt> {
        self.confirm.as_ref()
    }

    pub fn plan(&self) -> Option<&PlanFlow> {
        self.plan.as_ref()
    }

    /// Handles the new-task form.
    ///
    /// # Errors
    /// - `FormError::EmptyTitle` when the title is blank; the inline error is
    ///   recorded and no task is created.
    pub fn submit_task(
        &mut self,
        title: &str,
        priority: Priority,
        note: Option<&str>,
    ) -> Result<TaskId, FormError> {
        if title.trim().is_empty() {
            self.title_error = Some(FormError::EmptyTitle.message().to_string());
            return Err(FormError::EmptyTitle);
        }
        self.flush_fade();
        let id = self
            .store
            .add(title, priority, note)
            .map_err(|_| FormError::EmptyTitle)?;
        self.title_error = None;
        Ok(id)
    }

    /// Clears the title error once the user types a non-blank title.
    pub fn edit_title(&mut self, title: &str) {
        if !title.trim().is_empty() {
            self.title_error = None;
        }
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.flush_fade();
        self.store.toggle(id)
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    /// Opens the delete confirmation for `id`.
    pub fn request_delete(&mut self, id: &str) -> &ConfirmPrompt {
        let message = match self.store.get(id) {
            Some(task) => format!("Delete \"{}\"?", task.title),
            None => "Delete this task?".to_string(),
        };
        self.confirm.insert(ConfirmPrompt {
            task_id: id.to_string(),
            message,
        })
    }

    pub fn cancel_delete(&mut self) {
        self.confirm = None;
    }

    /// Confirms the open prompt and deletes the task from the store.
    ///
    /// A task visible in the current list keeps a fading row until
    /// `finish_fade`. Returns `None` when no confirmation is open.
    pub fn confirm_delete(&mut self) -> Option<DeleteOutcome> {
        let prompt = self.confirm.take()?;
        self.flush_fade();

        let id = prompt.task_id;
        let visible = self.current_list().contains(&id);
        let removed = self.store.get(&id).cloned();
        self.store.delete(&id);
        match removed {
            Some(task) if visible => {
                self.fading = Some(task);
                Some(DeleteOutcome::Fading(id))
            }
            _ => Some(DeleteOutcome::Removed(id)),
        }
    }

    /// Drops the fading row. Returns whether one was showing.
    pub fn finish_fade(&mut self) -> bool {
        self.fading.take().is_some()
    }

    pub fn fading(&self) -> Option<&str> {
        self.fading.as_ref().map(|task| task.id.as_str())
    }

    pub fn open_plan(&mut self) {
        self.plan = Some(PlanFlow::default());
    }

    pub fn close_plan(&mut self) {
        self.plan = None;
    }

    /// Generates suggestions for `goal`, opening the plan flow if needed.
    ///
    /// # Errors
    /// - `FormError::EmptyGoal` when the goal is blank; the flow stays on the
    ///   input step with an inline error.
    pub fn generate_plan(
        &mut self,
        goal: &str,
        budget: TimeBudget,
    ) -> Result<&[Suggestion], FormError> {
        let flow = self.plan.get_or_insert_with(PlanFlow::default);
        if goal.trim().is_empty() {
            flow.goal_error = Some(FormError::EmptyGoal.message().to_string());
            return Err(FormError::EmptyGoal);
        }
        flow.show_results(generate_plan(goal.trim(), budget));
        Ok(flow.suggestions())
    }

    /// Returns from the results step to the input step.
    pub fn plan_back(&mut self) {
        if let Some(flow) = self.plan.as_mut() {
            flow.step = PlanStep::Input;
        }
    }

    /// Checks or unchecks one suggestion. Returns `false` for unknown indices.
    pub fn set_suggestion_selected(&mut self, index: usize, selected: bool) -> bool {
        self.plan
            .as_mut()
            .is_some_and(|flow| flow.set_selected(index, selected))
    }

    /// Adds every generated suggestion as a task and closes the flow.
    pub fn accept_all(&mut self) -> Vec<TaskId> {
        let Some(flow) = self.plan.take() else {
            return Vec::new();
        };
        self.add_suggestions(flow.suggestions.iter())
    }

    /// Adds the checked suggestions as tasks and closes the flow.
    pub fn accept_selected(&mut self) -> Vec<TaskId> {
        let Some(flow) = self.plan.take() else {
            return Vec::new();
        };
        self.add_suggestions(flow.selected_suggestions())
    }

    /// Closes whichever modal is open.
    pub fn escape(&mut self) {
        self.plan = None;
        self.confirm = None;
    }

    /// Projects the current state into display data.
    pub fn view_model(&self, today: NaiveDate) -> AppViewModel {
        AppViewModel {
            header_date: header_date(today),
            dashboard: DashboardStats::from_tasks(self.store.tasks()),
            filter: self.filter.as_str(),
            sort: self.sort.as_str(),
            list: self.current_list(),
            title_error: self.title_error.clone(),
            confirm: self.confirm.clone(),
            plan: self.plan.as_ref().map(PlanFlow::to_view),
        }
    }

    fn current_list(&self) -> TaskListView {
        match &self.fading {
            Some(fading) => {
                let mut tasks = self.store.tasks().to_vec();
                tasks.push(fading.clone());
                build_task_list(&tasks, self.filter, self.sort, Some(fading.id.as_str()))
            }
            None => build_task_list(self.store.tasks(), self.filter, self.sort, None),
        }
    }

    fn add_suggestions<'a>(
        &mut self,
        suggestions: impl Iterator<Item = &'a Suggestion>,
    ) -> Vec<TaskId> {
        self.flush_fade();
        let ids: Vec<TaskId> = suggestions
            .filter_map(|suggestion| {
                self.store
                    .add(
                        &suggestion.title,
                        suggestion.priority,
                        suggestion.note.as_deref(),
                    )
                    .ok()
            })
            .collect();
        info!("event=plan_accept module=app status=ok count={}", ids.len());
        ids
    }

    fn flush_fade(&mut self) {
        self.fading = None;
    }
}
