//! Core domain logic for DayPilot.
//! This crate is the single source of truth for task and planning invariants.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod planner;
pub mod repo;
pub mod service;
pub mod view;

pub use app::{AppState, AppViewModel, ConfirmPrompt, DeleteOutcome, FormError, PlanStep};
pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::suggestion::Suggestion;
pub use model::task::{Priority, Task, TaskId, TaskValidationError};
pub use planner::{detect_category, generate_plan, Category, TimeBudget};
pub use repo::kv_repo::{KvStore, MemoryKvStore, SqliteKvStore, StorageError, StorageResult};
pub use service::task_store::{Clock, SystemClock, TaskStore, TASKS_STORAGE_KEY};
pub use view::model::{DashboardStats, TaskCard, TaskListView};
pub use view::ordering::{filter_and_sort, SortMode, TaskFilter};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Opens the configured task database, falling back to in-memory storage.
///
/// The fallback keeps the app usable when the database file cannot be opened;
/// tasks then live only for the current process.
pub fn open_storage(config: &AppConfig) -> Box<dyn KvStore> {
    let opened = db::open_db(&config.db_path)
        .map_err(StorageError::from)
        .and_then(SqliteKvStore::try_new);
    match opened {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!(
                "event=storage_open module=core status=fallback mode=memory error={}",
                err
            );
            Box::new(MemoryKvStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, open_storage, ping, AppConfig, KvStore};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn open_storage_falls_back_when_path_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_lookup(|_| None).with_db_path(dir.path());
        let mut storage = open_storage(&config);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
