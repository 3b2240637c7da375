use daypilot_core::{Priority, Task, TaskValidationError};

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::with_id(
        "t-1",
        "Plan sprint",
        Priority::High,
        Some("by 10am"),
        1_700_000_000_000,
    )
    .unwrap();
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "t-1");
    assert_eq!(json["title"], "Plan sprint");
    assert_eq!(json["note"], "by 10am");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["completed"], true);
    assert_eq!(json["createdAt"], 1_700_000_000_000_i64);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn empty_or_missing_note_reads_as_none() {
    let with_empty = serde_json::json!({
        "id": "x",
        "title": "t",
        "note": "",
        "priority": "medium",
        "completed": false,
        "createdAt": 5
    });
    let task: Task = serde_json::from_value(with_empty).unwrap();
    assert_eq!(task.note, None);

    let without_note = serde_json::json!({
        "id": "y",
        "title": "t",
        "priority": "low",
        "createdAt": 6
    });
    let task: Task = serde_json::from_value(without_note).unwrap();
    assert_eq!(task.note, None);
    assert!(!task.completed);
}

#[test]
fn unknown_priority_is_rejected_on_decode() {
    let value = serde_json::json!({
        "id": "z",
        "title": "t",
        "priority": "urgent",
        "createdAt": 1
    });
    assert!(serde_json::from_value::<Task>(value).is_err());
}

#[test]
fn with_id_rejects_empty_id() {
    let err = Task::with_id("", "title", Priority::Low, None, 0).unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyId);
}
