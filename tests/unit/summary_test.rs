//! Unit tests for log aggregation.

use aceest::metrics::{daily_totals, get_summary, progress, weekly_progress};
use aceest::workouts::{add_entry_at, Category, WorkoutInput, WorkoutLog};
use chrono::{Duration, Local, TimeZone};

fn session_log() -> WorkoutLog {
    let mut log = WorkoutLog::new();
    let now = Local.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
    add_entry_at(&mut log, &WorkoutInput::new("Warm-up", "Jog", 10), 70.0, now).unwrap();
    add_entry_at(&mut log, &WorkoutInput::new("Workout", "Squats", 20), 70.0, now).unwrap();
    add_entry_at(&mut log, &WorkoutInput::new("Cool-down", "Stretch", 5), 70.0, now).unwrap();
    log
}

#[test]
fn test_summary_of_one_session() {
    let summary = get_summary(&session_log());

    assert_eq!(summary.total_duration, 35);
    assert_eq!(summary.duration_of(Category::WarmUp), 10);
    assert_eq!(summary.duration_of(Category::Workout), 20);
    assert_eq!(summary.duration_of(Category::CoolDown), 5);

    // 36.75 + 147.0 + 15.3125
    let total = summary.total_calories.unwrap();
    assert!((total - 199.0625).abs() < 1e-9);
    assert_eq!(summary.total_calories_display(), Some(199.1));
}

#[test]
fn test_summary_totals_match_entries() {
    let log = session_log();
    let summary = get_summary(&log);

    let from_entries: u64 = log.iter().map(|(_, e)| e.duration_minutes as u64).sum();
    let from_categories: u64 = summary.category_totals.values().map(|t| t.duration).sum();
    assert_eq!(summary.total_duration, from_entries);
    assert_eq!(summary.total_duration, from_categories);
}

#[test]
fn test_summary_is_repeatable() {
    let log = session_log();
    assert_eq!(get_summary(&log), get_summary(&log));
}

#[test]
fn test_summary_without_calorie_tracking() {
    let mut log = WorkoutLog::with_calorie_tracking(false);
    let now = Local.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
    add_entry_at(&mut log, &WorkoutInput::new("Workout", "Row", 15), 70.0, now).unwrap();

    let summary = get_summary(&log);
    assert_eq!(summary.total_duration, 15);
    assert_eq!(summary.total_calories, None);
    assert_eq!(summary.total_calories_display(), None);
    for category in Category::ALL {
        assert_eq!(summary.category_totals[&category].calories, None);
    }
}

#[test]
fn test_progress_lists_every_category() {
    let totals = progress(&WorkoutLog::new());
    assert_eq!(totals.len(), 3);
    assert!(totals.values().all(|minutes| *minutes == 0));

    let totals = progress(&session_log());
    assert_eq!(totals[&Category::Workout], 20);
}

#[test]
fn test_daily_and_weekly_totals() {
    let mut log = WorkoutLog::new();
    let today = Local.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    add_entry_at(&mut log, &WorkoutInput::new("Workout", "Row", 30), 70.0, today).unwrap();
    add_entry_at(
        &mut log,
        &WorkoutInput::new("Workout", "Row", 10),
        70.0,
        today - Duration::days(6),
    )
    .unwrap();
    add_entry_at(
        &mut log,
        &WorkoutInput::new("Workout", "Row", 60),
        70.0,
        today - Duration::days(7),
    )
    .unwrap();

    let daily = daily_totals(&log);
    assert_eq!(daily.len(), 3);
    assert_eq!(daily.last().map(|d| d.duration), Some(30));

    let week = weekly_progress(&log, 2000, today.date_naive());
    assert_eq!(week.start, today.date_naive() - Duration::days(6));
    assert_eq!(week.duration, 40);
    assert!((week.calories - 294.0).abs() < 1e-9);
    assert!((week.remaining() - 1706.0).abs() < 1e-9);
    assert!(week.fraction() > 0.14 && week.fraction() < 0.15);
}
