//! Task store use-case service.
//!
//! # Responsibility
//! - Hold the in-memory task collection in newest-first insertion order.
//! - Mirror the full collection into one key-value slot after every mutation.
//!
//! # Invariants
//! - Storage failures never surface to callers: load falls back to an empty
//!   collection and failed writes keep the in-memory state authoritative.
//! - Lookups on absent ids are silent no-ops.
//! - Task titles and notes are never written to logs.

use crate::model::task::{Priority, Task, TaskId, TaskValidationError};
use crate::repo::kv_repo::{KvStore, StorageResult};
use log::{debug, error, warn};

/// Key of the persisted task collection slot.
pub const TASKS_STORAGE_KEY: &str = "daypilot-tasks";

/// Source of creation timestamps in epoch milliseconds.
pub trait Clock {
    fn now_epoch_ms(&self) -> i64;
}

/// Wall clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// In-memory task collection mirrored to a key-value slot.
pub struct TaskStore<S: KvStore, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    tasks: Vec<Task>,
}

impl<S: KvStore> TaskStore<S, SystemClock> {
    /// Loads the persisted collection using the system clock.
    pub fn load(storage: S) -> Self {
        Self::load_with_clock(storage, SystemClock)
    }
}

impl<S: KvStore, C: Clock> TaskStore<S, C> {
    /// Loads the persisted collection.
    ///
    /// Absent, unreadable or corrupt payloads yield an empty collection.
    pub fn load_with_clock(storage: S, clock: C) -> Self {
        let tasks = match read_tasks(&storage) {
            Ok(Some(tasks)) => {
                debug!(
                    "event=tasks_load module=task_store status=ok count={}",
                    tasks.len()
                );
                tasks
            }
            Ok(None) => {
                debug!("event=tasks_load module=task_store status=empty");
                Vec::new()
            }
            Err(err) => {
                warn!(
                    "event=tasks_load module=task_store status=fallback error_code=load_failed error={}",
                    err
                );
                Vec::new()
            }
        };

        Self {
            storage,
            clock,
            tasks,
        }
    }

    /// Creates a task, prepends it and persists the collection.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is blank; the collection is unchanged.
    pub fn add(
        &mut self,
        title: &str,
        priority: Priority,
        note: Option<&str>,
    ) -> Result<TaskId, TaskValidationError> {
        let task = Task::new(title, priority, note, self.clock.now_epoch_ms())?;
        let id = task.id.clone();
        self.tasks.insert(0, task);
        debug!(
            "event=task_add module=task_store status=ok priority={} count={}",
            priority,
            self.tasks.len()
        );
        self.persist();
        Ok(id)
    }

    /// Flips the completion flag of `id`.
    ///
    /// Returns `false` without touching storage when `id` is unknown.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.toggle();
        debug!(
            "event=task_toggle module=task_store status=ok completed={}",
            task.completed
        );
        self.persist();
        true
    }

    /// Removes the task with `id`.
    ///
    /// Returns `false` without touching storage when `id` is unknown.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }
        debug!(
            "event=task_delete module=task_store status=ok count={}",
            self.tasks.len()
        );
        self.persist();
        true
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks in storage order (newest insert first).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        if let Err(err) = write_tasks(&mut self.storage, &self.tasks) {
            error!(
                "event=tasks_save module=task_store status=error error_code=save_failed error={}",
                err
            );
        }
    }
}

fn read_tasks(storage: &impl KvStore) -> StorageResult<Option<Vec<Task>>> {
    let Some(raw) = storage.get(TASKS_STORAGE_KEY)? else {
        return Ok(None);
    };
    let mut tasks: Vec<Task> = serde_json::from_str(&raw)?;
    // Entries that break record invariants are dropped rather than failing the load.
    tasks.retain(|task| task.validate().is_ok());
    Ok(Some(tasks))
}

fn write_tasks(storage: &mut impl KvStore, tasks: &[Task]) -> StorageResult<()> {
    let payload = serde_json::to_string(tasks)?;
    storage.set(TASKS_STORAGE_KEY, &payload)
}
