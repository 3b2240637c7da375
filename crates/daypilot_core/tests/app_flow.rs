use chrono::NaiveDate;
use daypilot_core::db::open_db;
use daypilot_core::{
    filter_and_sort, AppState, Clock, DeleteOutcome, FormError, MemoryKvStore, PlanStep,
    Priority, SortMode, SqliteKvStore, TaskFilter, TaskListView, TaskStore, TimeBudget,
};
use std::cell::Cell;

struct StepClock(Cell<i64>);

impl Clock for StepClock {
    fn now_epoch_ms(&self) -> i64 {
        let value = self.0.get();
        self.0.set(value + 1_000);
        value
    }
}

fn app() -> AppState<MemoryKvStore, StepClock> {
    AppState::new(TaskStore::load_with_clock(
        MemoryKvStore::new(),
        StepClock(Cell::new(1_000)),
    ))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn empty_title_sets_inline_error_without_state_change() {
    let mut app = app();

    let err = app.submit_task("   ", Priority::High, Some("note")).unwrap_err();
    assert_eq!(err, FormError::EmptyTitle);
    assert_eq!(app.title_error(), Some("Please enter a task title."));
    assert!(app.store().is_empty());

    app.edit_title("x");
    assert_eq!(app.title_error(), None);

    app.submit_task("   ", Priority::High, None).unwrap_err();
    app.submit_task("Real task", Priority::High, None).unwrap();
    assert_eq!(app.title_error(), None);
    assert_eq!(app.store().len(), 1);
}

#[test]
fn completed_tasks_never_precede_incomplete_ones() {
    let mut app = app();
    let ids: Vec<_> = [
        ("a", Priority::Low),
        ("b", Priority::High),
        ("c", Priority::Medium),
        ("d", Priority::High),
        ("e", Priority::Low),
    ]
    .into_iter()
    .map(|(title, priority)| app.submit_task(title, priority, None).unwrap())
    .collect();
    app.toggle(&ids[1]);
    app.toggle(&ids[4]);

    let assert_partitioned = |flags: &[bool], context: &str| {
        let first_done = flags.iter().position(|done| *done).unwrap_or(flags.len());
        assert!(flags[first_done..].iter().all(|done| *done), "{context}: {flags:?}");
    };

    for sort in [SortMode::Priority, SortMode::Newest] {
        let ordered = filter_and_sort(app.store().tasks(), TaskFilter::All, sort);
        let flags: Vec<bool> = ordered.iter().map(|task| task.completed).collect();
        assert_partitioned(&flags, sort.as_str());
    }

    app.set_sort(SortMode::Newest);
    let flat = app.view_model(today()).list;
    let flags: Vec<bool> = flat.cards().iter().map(|card| card.completed).collect();
    assert_partitioned(&flags, "flat");

    app.set_sort(SortMode::Priority);
    let TaskListView::Grouped { groups } = app.view_model(today()).list else {
        panic!("priority sort should group");
    };
    for group in &groups {
        let flags: Vec<bool> = group.cards.iter().map(|card| card.completed).collect();
        assert_partitioned(&flags, &group.header);
    }
    // Groups follow priority, so a completed high task sits above open low ones.
    assert_eq!(groups[0].header, "high priority");
    assert!(groups[0].cards.iter().any(|card| card.completed));
}

#[test]
fn priority_groups_keep_completed_tasks_last_within_group() {
    let mut app = app();
    let done = app.submit_task("done high", Priority::High, None).unwrap();
    app.submit_task("open high", Priority::High, None).unwrap();
    app.submit_task("open low", Priority::Low, None).unwrap();
    app.toggle(&done);

    let view = app.view_model(today());
    let TaskListView::Grouped { groups } = view.list else {
        panic!("priority sort should group");
    };
    assert_eq!(groups.len(), 2);
    let high_titles: Vec<_> = groups[0].cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(high_titles, vec!["open high", "done high"]);
    assert_eq!(groups[1].header, "low priority");
}

#[test]
fn dashboard_percent_tracks_completion() {
    let mut app = app();
    assert_eq!(app.view_model(today()).dashboard.percent, 0);

    let first = app.submit_task("one", Priority::Medium, None).unwrap();
    app.submit_task("two", Priority::Medium, None).unwrap();
    app.submit_task("three", Priority::Medium, None).unwrap();
    app.toggle(&first);

    let stats = app.view_model(today()).dashboard;
    assert_eq!((stats.total, stats.completed, stats.pending), (3, 1, 2));
    assert_eq!(stats.percent, 33);
}

#[test]
fn delete_of_visible_task_fades_then_removes() {
    let mut app = app();
    let id = app.submit_task("Water plants", Priority::Low, None).unwrap();

    let prompt = app.request_delete(&id);
    assert_eq!(prompt.message, "Delete \"Water plants\"?");

    assert_eq!(app.confirm_delete(), Some(DeleteOutcome::Fading(id.clone())));
    assert!(app.confirm_prompt().is_none());
    assert!(app.store().is_empty());

    let view = app.view_model(today());
    assert_eq!(view.dashboard.total, 0);
    let cards = view.list.cards();
    assert_eq!(cards.len(), 1);
    assert!(cards[0].fading);
    assert_eq!(app.fading(), Some(id.as_str()));

    assert!(app.finish_fade());
    assert!(app.fading().is_none());
    assert!(matches!(app.view_model(today()).list, TaskListView::Empty { .. }));
    assert!(!app.finish_fade());
}

#[test]
fn confirmed_delete_survives_reload_without_fade_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.sqlite3");
    let open = || SqliteKvStore::try_new(open_db(&path).unwrap()).unwrap();

    let mut app = AppState::load(open());
    let keep = app.submit_task("keep", Priority::Low, None).unwrap();
    let doomed = app.submit_task("doomed", Priority::High, None).unwrap();
    app.request_delete(&doomed);
    assert_eq!(app.confirm_delete(), Some(DeleteOutcome::Fading(doomed.clone())));
    drop(app);

    let reloaded = TaskStore::load(open());
    assert!(reloaded.get(&doomed).is_none());
    assert!(reloaded.get(&keep).is_some());
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn delete_of_hidden_task_removes_immediately() {
    let mut app = app();
    let id = app.submit_task("Hidden", Priority::Low, None).unwrap();
    app.toggle(&id);
    app.set_filter(TaskFilter::Active);

    app.request_delete(&id);
    assert_eq!(app.confirm_delete(), Some(DeleteOutcome::Removed(id)));
    assert!(app.store().is_empty());
}

#[test]
fn pending_fade_is_flushed_by_next_mutation() {
    let mut app = app();
    let doomed = app.submit_task("doomed", Priority::High, None).unwrap();
    app.request_delete(&doomed);
    app.confirm_delete();

    // The host never reports the fade end.
    app.submit_task("next", Priority::High, None).unwrap();
    assert!(app.store().get(&doomed).is_none());
    assert_eq!(app.store().len(), 1);
    assert!(app.fading().is_none());
    assert!(app.view_model(today()).list.cards().iter().all(|card| !card.fading));
}

#[test]
fn toggle_and_accept_drop_a_pending_fade() {
    let mut app = app();
    let other = app.submit_task("other", Priority::Low, None).unwrap();
    let doomed = app.submit_task("doomed", Priority::High, None).unwrap();

    app.request_delete(&doomed);
    app.confirm_delete();
    assert!(app.toggle(&other));
    assert!(app.fading().is_none());
    assert!(app.store().get(&doomed).is_none());

    let second = app.submit_task("second", Priority::Medium, None).unwrap();
    app.request_delete(&second);
    app.confirm_delete();
    app.generate_plan("gym", TimeBudget::Short).unwrap();
    assert_eq!(app.accept_all().len(), 4);
    assert!(app.fading().is_none());
    assert!(app.store().get(&second).is_none());
    assert_eq!(app.store().len(), 5);
}

#[test]
fn second_confirmation_replaces_the_fading_row() {
    let mut app = app();
    let first = app.submit_task("first", Priority::High, None).unwrap();
    let second = app.submit_task("second", Priority::High, None).unwrap();

    app.request_delete(&first);
    assert_eq!(app.confirm_delete(), Some(DeleteOutcome::Fading(first.clone())));
    app.request_delete(&second);
    assert_eq!(app.confirm_delete(), Some(DeleteOutcome::Fading(second.clone())));

    assert!(app.store().is_empty());
    let view = app.view_model(today());
    let ids: Vec<_> = view.list.cards().iter().map(|card| card.id.clone()).collect();
    assert_eq!(ids, vec![second]);
}

#[test]
fn cancelled_or_unknown_delete_changes_nothing() {
    let mut app = app();
    app.submit_task("keep", Priority::Medium, None).unwrap();

    let prompt = app.request_delete("missing");
    assert_eq!(prompt.message, "Delete this task?");
    app.cancel_delete();
    assert_eq!(app.confirm_delete(), None);

    app.request_delete("missing");
    assert_eq!(
        app.confirm_delete(),
        Some(DeleteOutcome::Removed("missing".to_string()))
    );
    assert_eq!(app.store().len(), 1);
}

#[test]
fn empty_goal_keeps_flow_on_input_step() {
    let mut app = app();
    app.open_plan();

    let err = app.generate_plan("  ", TimeBudget::Short).unwrap_err();
    assert_eq!(err, FormError::EmptyGoal);
    let plan = app.view_model(today()).plan.unwrap();
    assert_eq!(plan.step, PlanStep::Input);
    assert_eq!(plan.goal_error.as_deref(), Some("Please describe your goal."));
    assert!(plan.rows.is_empty());
}

#[test]
fn accept_selected_adds_only_checked_suggestions() {
    let mut app = app();
    app.open_plan();
    let titles: Vec<String> = app
        .generate_plan("I need to study for my exam", TimeBudget::Short)
        .unwrap()
        .iter()
        .map(|s| s.title.clone())
        .collect();
    assert_eq!(titles.len(), 4);
    assert_eq!(app.plan().unwrap().step(), PlanStep::Results);

    assert!(app.set_suggestion_selected(1, false));
    assert!(!app.set_suggestion_selected(10, false));

    let added = app.accept_selected();
    assert_eq!(added.len(), 3);
    assert!(app.plan().is_none());

    let stored: Vec<_> = app.store().tasks().iter().map(|t| t.title.clone()).collect();
    assert!(!stored.contains(&titles[1]));
    // Each accepted entry is prepended, so the last accepted is first.
    assert_eq!(stored[0], titles[3]);
}

#[test]
fn accept_all_with_unknown_budget_adds_six() {
    let mut app = app();
    app.generate_plan("xyz abc", TimeBudget::parse_or_default("unknown"))
        .unwrap();
    let added = app.accept_all();
    assert_eq!(added.len(), 6);
    assert!(app
        .store()
        .tasks()
        .iter()
        .any(|t| t.title == "Set today's top 3 priorities"));
}

#[test]
fn back_and_escape_close_the_right_things() {
    let mut app = app();
    app.generate_plan("gym", TimeBudget::Long).unwrap();
    app.plan_back();
    assert_eq!(app.plan().unwrap().step(), PlanStep::Input);

    let id = app.submit_task("task", Priority::Low, None).unwrap();
    app.request_delete(&id);
    app.escape();
    assert!(app.plan().is_none());
    assert!(app.confirm_prompt().is_none());
    assert_eq!(app.accept_all(), Vec::<String>::new());
}

#[test]
fn accepted_suggestions_do_not_alias_templates() {
    let mut app = app();
    app.generate_plan("clean house", TimeBudget::Short).unwrap();
    let ids = app.accept_all();
    app.toggle(&ids[0]);

    let fresh = daypilot_core::generate_plan("clean house", TimeBudget::Short);
    assert_eq!(fresh.len(), 4);
    assert_eq!(fresh[0].title, "Declutter main living area");
}
