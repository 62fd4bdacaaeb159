//! Integration tests for progress tracking on top of the SQLite store.

use chrono::NaiveDate;
use swissscoli_core::progress::{COMPLETED_EXERCISES_KEY, STREAK_KEY, WEEK_PROGRESS_KEY};
use swissscoli_core::{
    Catalog, CountdownTimer, Database, Event, KvStore, ProgressTracker, TimerState,
};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn progress_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("swissscoli.db");
    let day = date(2024, 9, 2);

    {
        let db = Database::open_at(&path).unwrap();
        let mut tracker = ProgressTracker::new(db, Catalog::builtin());
        for exercise in Catalog::builtin().list_exercises() {
            tracker.toggle_exercise_on(day, exercise.id).unwrap();
        }
        assert_eq!(tracker.streak(), 1);
    }

    let db = Database::open_at(&path).unwrap();
    let tracker = ProgressTracker::new(db, Catalog::builtin());
    assert_eq!(tracker.streak(), 1);
    assert_eq!(tracker.completion_percentage_on(day), 100);
    assert_eq!(tracker.completed_on(day), vec![1, 2, 3, 4, 5, 6]);

    let week = tracker.week_view_on(day);
    assert!(week[0].is_completed);
    assert!(week[0].is_today);
    assert!(week[1..].iter().all(|d| !d.is_completed));
}

#[test]
fn stored_layout_uses_plain_json() {
    let mut db = Database::open_memory().unwrap();
    db.set(COMPLETED_EXERCISES_KEY, r#"{"2024-09-02":[2,4]}"#).unwrap();
    db.set(WEEK_PROGRESS_KEY, "{}").unwrap();
    db.set(STREAK_KEY, "3").unwrap();

    let mut tracker = ProgressTracker::new(db, Catalog::builtin());
    assert_eq!(tracker.completion_percentage_on(date(2024, 9, 2)), 33);
    assert_eq!(tracker.streak(), 3);

    tracker.toggle_exercise_on(date(2024, 9, 3), 1).unwrap();
    let raw = tracker.store().get(COMPLETED_EXERCISES_KEY).unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["2024-09-02"], serde_json::json!([2, 4]));
    assert_eq!(parsed["2024-09-03"], serde_json::json!([1]));
}

#[test]
fn corrupt_database_values_do_not_block_startup() {
    let mut db = Database::open_memory().unwrap();
    db.set(COMPLETED_EXERCISES_KEY, "[]").unwrap();
    db.set(WEEK_PROGRESS_KEY, "null").unwrap();
    db.set(STREAK_KEY, "lots").unwrap();

    let mut tracker = ProgressTracker::new(db, Catalog::builtin());
    assert_eq!(tracker.aggregate_stats().total_exercises_completed, 0);
    assert_eq!(tracker.streak(), 0);

    tracker.toggle_exercise_on(date(2024, 9, 2), 5).unwrap();
    assert_eq!(tracker.aggregate_stats().total_exercises_completed, 1);
}

#[test]
fn reset_all_wipes_database() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("swissscoli.db");
    let mut db = Database::open_at(&path).unwrap();
    db.set("unrelated", "value").unwrap();

    let mut tracker = ProgressTracker::new(db, Catalog::builtin());
    tracker.toggle_exercise_on(date(2024, 9, 2), 1).unwrap();
    tracker.reset_all().unwrap();

    let db = Database::open_at(&path).unwrap();
    assert!(db.get("unrelated").unwrap().is_none());
    let tracker = ProgressTracker::new(db, Catalog::builtin());
    let stats = tracker.aggregate_stats();
    assert_eq!(
        (stats.total_trained_days, stats.total_exercises_completed, stats.average_per_day),
        (0, 0, 0)
    );
}

#[test]
fn timer_session_then_mark_done() {
    let catalog = Catalog::builtin();
    let exercise = catalog.get(5).unwrap();
    let mut timer = CountdownTimer::new();
    let mut tracker = ProgressTracker::new(Database::open_memory().unwrap(), catalog);
    let day = date(2024, 9, 2);

    timer.start(exercise.id, exercise.duration);
    let mut completed = None;
    for _ in 0..exercise.duration {
        if let Some(event) = timer.tick() {
            completed = Some(event);
        }
    }
    assert_eq!(timer.state(), TimerState::Idle);
    assert!(matches!(completed, Some(Event::TimerCompleted { exercise_id: 5, .. })));

    tracker.toggle_exercise_on(day, exercise.id).unwrap();
    assert!(tracker.is_completed_on(day, 5));
    let unlocked: Vec<&str> = tracker
        .achievements()
        .into_iter()
        .filter(|a| a.unlocked)
        .map(|a| a.name)
        .collect();
    assert_eq!(unlocked, vec!["Erste Übung"]);
}
