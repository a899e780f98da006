//! Unit tests for CSV and weekly report exports.

use aceest::reports::{
    export_log_csv, export_log_csv_to_file, export_weekly_report, generate_report_filename,
    ExportError,
};
use aceest::storage::{save_profile, ProfileInput, ProfileStore, UserProfile};
use aceest::workouts::{add_entry_at, WorkoutInput, WorkoutLog};
use chrono::{Duration, Local, TimeZone};
use tempfile::tempdir;

fn profile() -> UserProfile {
    let mut store = ProfileStore::new();
    save_profile(
        &mut store,
        &ProfileInput {
            name: "Ann Lee".to_string(),
            regn_id: "R7".to_string(),
            age: "28".into(),
            gender: "F".to_string(),
            height: "165".into(),
            weight: "60".into(),
        },
    )
    .unwrap()
}

#[test]
fn test_csv_requires_entries() {
    assert!(matches!(
        export_log_csv(&WorkoutLog::new()),
        Err(ExportError::NoData)
    ));
}

#[test]
fn test_csv_file_export() {
    let mut log = WorkoutLog::new();
    let now = Local.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
    add_entry_at(&mut log, &WorkoutInput::new("Workout", "Row, easy", 30), 70.0, now).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("log.csv");
    export_log_csv_to_file(&log, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "timestamp,category,exercise,duration_minutes,calories");
    assert_eq!(lines[1], "2024-03-04 09:00:00,Workout,\"Row, easy\",30,220.5");
}

#[test]
fn test_weekly_report_requires_profile() {
    let err = export_weekly_report(None, &WorkoutLog::new(), Local::now().date_naive());
    assert!(matches!(err, Err(ExportError::NoProfile)));
    assert_eq!(
        ExportError::NoProfile.to_string(),
        "Please save user info before exporting a report"
    );
}

#[test]
fn test_weekly_report_covers_last_seven_days() {
    let profile = profile();
    let today = Local.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap();

    let mut log = WorkoutLog::new();
    add_entry_at(&mut log, &WorkoutInput::new("Workout", "Run", 30), 60.0, today).unwrap();
    add_entry_at(
        &mut log,
        &WorkoutInput::new("Workout", "Old run", 45),
        60.0,
        today - Duration::days(8),
    )
    .unwrap();

    let report = export_weekly_report(Some(&profile), &log, today.date_naive()).unwrap();

    assert!(report.contains("Name: Ann Lee"));
    assert!(report.contains("Period: 2024-03-04 to 2024-03-10"));
    assert!(report.contains("Workout,30,189.0"));
    assert!(report.contains("Warm-up,0,0.0"));
    assert!(report.contains("Total,30,189.0"));
    assert!(report.contains("Calories burned: 189.0 / 2000 kcal (9%)"));
    assert!(report.contains("Remaining: 1811.0 kcal"));
    assert!(report.contains("2024-03-10 18:00:00,Workout,Run,30,189.0"));
    assert!(!report.contains("Old run"));
}

#[test]
fn test_report_filename() {
    let today = Local.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap();
    assert_eq!(
        generate_report_filename(&profile(), today.date_naive()),
        "Ann_Lee_weekly_report_20240310.txt"
    );
}
