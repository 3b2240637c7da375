//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level task and plan functions to Dart via FRB.
//! - Keep error semantics simple: every failure becomes a response message.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Each call loads the persisted collection, applies one action and writes
//!   it back; calls are serialized so concurrent callers never lose updates.

use chrono::NaiveDate;
use daypilot_core::{
    core_version as core_version_inner, detect_category, generate_plan,
    init_logging as init_logging_inner, open_storage, ping as ping_inner, AppConfig, AppState,
    AppViewModel, FormError, KvStore, Priority, SortMode, TaskCard, TaskFilter, TaskListView,
    TimeBudget,
};
use log::warn;
use std::sync::{Mutex, OnceLock};

/// Opens the key-value slot for one call.
type StorageOpener = fn() -> Box<dyn KvStore>;

static ENTRY_CONFIG: OnceLock<AppConfig> = OnceLock::new();
static ENTRY_STORAGE: OnceLock<StorageOpener> = OnceLock::new();
static ENTRY_LOCK: Mutex<()> = Mutex::new(());

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected task ID, when there is one.
    pub task_id: Option<String>,
    /// Human-readable message for inline display.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: Option<String>) -> Self {
        Self {
            ok: true,
            task_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// One task row for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub task_id: String,
    pub title: String,
    pub note: Option<String>,
    /// `high|medium|low`.
    pub priority: String,
    pub completed: bool,
    /// Group header preceding this row in priority mode; `None` otherwise.
    pub group_header: Option<String>,
}

/// List view response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskViewResponse {
    pub header_date: String,
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    pub percent: u32,
    pub items: Vec<TaskItem>,
    /// Placeholder text when `items` is empty.
    pub empty_message: Option<String>,
    /// Effective filter after normalizing unknown input.
    pub applied_filter: String,
    /// Effective sort after normalizing unknown input.
    pub applied_sort: String,
}

/// One generated suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSuggestionItem {
    pub index: u32,
    pub title: String,
    pub note: Option<String>,
    pub priority: String,
}

/// Plan generation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanResponse {
    pub ok: bool,
    /// Detected category name.
    pub category: String,
    pub items: Vec<PlanSuggestionItem>,
    pub message: String,
}

/// Plan acceptance response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanAcceptResponse {
    pub ok: bool,
    pub task_ids: Vec<String>,
    pub message: String,
}

/// Creates a task from the new-task form.
///
/// Unknown priority text falls back to `medium`.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_add(title: String, priority: String, note: Option<String>) -> TaskActionResponse {
    let priority = Priority::parse(&priority).unwrap_or_default();
    with_app_state(|app| {
        match app.submit_task(&title, priority, note.as_deref()) {
            Ok(task_id) => TaskActionResponse::success("Task created.", Some(task_id)),
            Err(err) => TaskActionResponse::failure(err.message()),
        }
    })
}

/// Flips a task's completion flag; unknown ids succeed without change.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_toggle(task_id: String) -> TaskActionResponse {
    with_app_state(|app| {
        let message = if app.toggle(&task_id) {
            "Task updated."
        } else {
            "No matching task."
        };
        TaskActionResponse::success(message, Some(task_id))
    })
}

/// Deletes a task after the host has shown its own confirmation.
///
/// Fade animations are a host concern, so removal is immediate here.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_delete(task_id: String) -> TaskActionResponse {
    with_app_state(|app| {
        app.request_delete(&task_id);
        app.confirm_delete();
        app.finish_fade();
        TaskActionResponse::success("Task deleted.", Some(task_id))
    })
}

/// Returns dashboard counters and the ordered task list.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_view(filter: String, sort: String) -> TaskViewResponse {
    let filter = TaskFilter::parse(&filter).unwrap_or_default();
    let sort = SortMode::parse(&sort).unwrap_or_default();
    with_app_state(|app| {
        app.set_filter(filter);
        app.set_sort(sort);
        let view = app.view_model(local_today());
        to_view_response(view)
    })
}

/// Generates suggestions for a goal without touching stored tasks.
#[flutter_rust_bridge::frb(sync)]
pub fn plan_generate(goal: String, budget: String) -> PlanResponse {
    if goal.trim().is_empty() {
        return PlanResponse {
            ok: false,
            category: String::new(),
            items: Vec::new(),
            message: FormError::EmptyGoal.message().to_string(),
        };
    }
    let budget = TimeBudget::parse_or_default(&budget);
    let items = generate_plan(&goal, budget)
        .into_iter()
        .enumerate()
        .map(|(index, suggestion)| PlanSuggestionItem {
            index: index as u32,
            title: suggestion.title,
            note: suggestion.note,
            priority: suggestion.priority.as_str().to_string(),
        })
        .collect::<Vec<_>>();
    PlanResponse {
        ok: true,
        category: detect_category(&goal).as_str().to_string(),
        message: format!("Generated {} suggestion(s).", items.len()),
        items,
    }
}

/// Regenerates the plan for `goal` and accepts the listed indices.
///
/// `indices = None` accepts every suggestion; out-of-range indices are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn plan_accept(goal: String, budget: String, indices: Option<Vec<u32>>) -> PlanAcceptResponse {
    let budget = TimeBudget::parse_or_default(&budget);
    with_app_state(|app| {
        let count = match app.generate_plan(&goal, budget) {
            Ok(suggestions) => suggestions.len(),
            Err(err) => {
                return PlanAcceptResponse {
                    ok: false,
                    task_ids: Vec::new(),
                    message: err.message().to_string(),
                };
            }
        };
        let task_ids = match indices {
            None => app.accept_all(),
            Some(keep) => {
                for index in 0..count {
                    app.set_suggestion_selected(index, keep.contains(&(index as u32)));
                }
                app.accept_selected()
            }
        };
        PlanAcceptResponse {
            ok: true,
            message: format!("Added {} task(s).", task_ids.len()),
            task_ids,
        }
    })
}

fn entry_config() -> &'static AppConfig {
    ENTRY_CONFIG.get_or_init(AppConfig::from_env)
}

fn open_configured_storage() -> Box<dyn KvStore> {
    open_storage(entry_config())
}

fn with_app_state<T>(f: impl FnOnce(&mut AppState<Box<dyn KvStore>>) -> T) -> T {
    // A poisoned lock only means an earlier call panicked; storage is still usable.
    let _guard = ENTRY_LOCK.lock().unwrap_or_else(|poisoned| {
        warn!("event=ffi_lock module=ffi status=recovered");
        poisoned.into_inner()
    });
    let open = ENTRY_STORAGE.get_or_init(|| open_configured_storage);
    let mut app = AppState::load(open());
    f(&mut app)
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn to_view_response(view: AppViewModel) -> TaskViewResponse {
    let items = match &view.list {
        TaskListView::Empty { .. } => Vec::new(),
        TaskListView::Flat { cards } => cards.iter().map(|card| to_task_item(card, None)).collect(),
        TaskListView::Grouped { groups } => groups
            .iter()
            .flat_map(|group| {
                group.cards.iter().enumerate().map(|(position, card)| {
                    let header = (position == 0).then(|| group.header.clone());
                    to_task_item(card, header)
                })
            })
            .collect(),
    };
    let empty_message = match view.list {
        TaskListView::Empty { message } => Some(message),
        _ => None,
    };

    TaskViewResponse {
        header_date: view.header_date,
        total: view.dashboard.total as u32,
        completed: view.dashboard.completed as u32,
        pending: view.dashboard.pending as u32,
        percent: u32::from(view.dashboard.percent),
        items,
        empty_message,
        applied_filter: view.filter.to_string(),
        applied_sort: view.sort.to_string(),
    }
}

fn to_task_item(card: &TaskCard, group_header: Option<String>) -> TaskItem {
    TaskItem {
        task_id: card.id.clone(),
        title: card.title.clone(),
        note: card.note.clone(),
        priority: card.priority.as_str().to_string(),
        completed: card.completed,
        group_header,
    }
}
