use daypilot_core::db::open_db;
use daypilot_core::{
    KvStore, MemoryKvStore, Priority, SqliteKvStore, TaskStore, TASKS_STORAGE_KEY,
};
use std::path::Path;

fn sqlite_store(path: &Path) -> SqliteKvStore {
    SqliteKvStore::try_new(open_db(path).unwrap()).unwrap()
}

#[test]
fn add_then_reload_round_trips_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daypilot.sqlite3");

    let mut store = TaskStore::load(sqlite_store(&path));
    let plain = store.add("Buy milk", Priority::Low, None).unwrap();
    let noted = store
        .add("  Write report  ", Priority::High, Some(" due Friday "))
        .unwrap();
    store.toggle(&plain);
    let before = store.tasks().to_vec();
    drop(store);

    let reloaded = TaskStore::load(sqlite_store(&path));
    assert_eq!(reloaded.tasks(), before.as_slice());

    let task = reloaded.get(&noted).unwrap();
    assert_eq!(task.title, "Write report");
    assert_eq!(task.note.as_deref(), Some("due Friday"));
    assert_eq!(task.priority, Priority::High);
    assert!(!task.completed);
    assert!(reloaded.get(&plain).unwrap().completed);
}

#[test]
fn every_mutation_rewrites_the_slot() {
    let mut store = TaskStore::load(MemoryKvStore::new());
    let id = store.add("stretch", Priority::Medium, None).unwrap();

    let saved = store.storage().get(TASKS_STORAGE_KEY).unwrap().unwrap();
    assert!(saved.contains(&id));

    store.toggle(&id);
    let saved = store.storage().get(TASKS_STORAGE_KEY).unwrap().unwrap();
    assert!(saved.contains("\"completed\":true"));

    store.delete(&id);
    let saved = store.storage().get(TASKS_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(saved, "[]");
}

#[test]
fn toggle_is_an_involution() {
    let mut store = TaskStore::load(MemoryKvStore::new());
    let id = store.add("read", Priority::Low, None).unwrap();
    let original = store.get(&id).unwrap().clone();

    store.toggle(&id);
    store.toggle(&id);
    assert_eq!(store.get(&id).unwrap(), &original);
}

#[test]
fn deleting_unknown_id_leaves_collection_unchanged() {
    let mut store = TaskStore::load(MemoryKvStore::new());
    store.add("one", Priority::High, None).unwrap();
    store.add("two", Priority::Low, None).unwrap();
    let before = store.tasks().to_vec();

    assert!(!store.delete("no-such-id"));
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn corrupt_and_invalid_payloads_degrade_gracefully() {
    let mut storage = MemoryKvStore::new();
    storage.set(TASKS_STORAGE_KEY, "not json at all").unwrap();
    assert!(TaskStore::load(storage).is_empty());

    let mut storage = MemoryKvStore::new();
    storage
        .set(
            TASKS_STORAGE_KEY,
            r#"[
                {"id":"a","title":"kept","note":"","priority":"high","completed":false,"createdAt":1},
                {"id":"b","title":"   ","note":"","priority":"low","completed":false,"createdAt":2}
            ]"#,
        )
        .unwrap();
    let store = TaskStore::load(storage);
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].id, "a");
    assert_eq!(store.tasks()[0].note, None);
}
