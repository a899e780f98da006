//! Unit tests for workout input validation.

use aceest::workouts::{validate_workout, Category, FieldValue, ValidationError, WorkoutInput};

fn input(category: &str, exercise: &str, duration: impl Into<FieldValue>) -> WorkoutInput {
    WorkoutInput::new(category, exercise, duration)
}

#[test]
fn test_accepts_each_category_label() {
    for (label, expected) in [
        ("Warm-up", Category::WarmUp),
        ("Workout", Category::Workout),
        ("Cool-down", Category::CoolDown),
    ] {
        let workout = validate_workout(&input(label, "Jog", 10)).unwrap();
        assert_eq!(workout.category, expected);
        assert_eq!(workout.duration_minutes, 10);
    }
}

#[test]
fn test_exercise_is_trimmed() {
    let workout = validate_workout(&input("Workout", "  Squats  ", 20)).unwrap();
    assert_eq!(workout.exercise, "Squats");
}

#[test]
fn test_blank_exercise_rejected() {
    for exercise in ["", "   ", "\t"] {
        assert_eq!(
            validate_workout(&input("Workout", exercise, 20)),
            Err(ValidationError::ExerciseRequired)
        );
    }
}

#[test]
fn test_duration_forms() {
    let ok: [FieldValue; 4] = [
        30.into(),
        "30".into(),
        " 30 ".into(),
        30.0.into(),
    ];
    for duration in ok {
        let workout = validate_workout(&input("Workout", "Row", duration)).unwrap();
        assert_eq!(workout.duration_minutes, 30);
    }

    let rejected: [FieldValue; 7] = [
        0.into(),
        (-5).into(),
        "abc".into(),
        "".into(),
        "12.5".into(),
        12.5.into(),
        "-1".into(),
    ];
    for duration in rejected {
        assert_eq!(
            validate_workout(&input("Workout", "Row", duration.clone())),
            Err(ValidationError::InvalidDuration),
            "duration {:?} should be rejected",
            duration
        );
    }
}

#[test]
fn test_zero_fraction_string_accepted() {
    let workout = validate_workout(&input("Cool-down", "Stretch", "30.0")).unwrap();
    assert_eq!(workout.duration_minutes, 30);
}

#[test]
fn test_duration_beyond_u32_rejected() {
    let huge = FieldValue::Integer(i64::from(u32::MAX) + 1);
    assert_eq!(
        validate_workout(&input("Workout", "Row", huge)),
        Err(ValidationError::InvalidDuration)
    );
}

#[test]
fn test_unknown_category_rejected() {
    let err = validate_workout(&input("Yoga", "Sun salutation", 15)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidCategory {
            value: "Yoga".to_string()
        }
    );
    assert_eq!(err.to_string(), "invalid category");
}

#[test]
fn test_category_match_is_exact() {
    for label in ["workout", "WARM-UP", "Warm up", " Workout"] {
        assert!(matches!(
            validate_workout(&input(label, "Jog", 10)),
            Err(ValidationError::InvalidCategory { .. })
        ));
    }
}

#[test]
fn test_checks_run_in_order() {
    // Exercise is reported before duration and category.
    assert_eq!(
        validate_workout(&input("Yoga", "", 0)),
        Err(ValidationError::ExerciseRequired)
    );
    assert_eq!(
        validate_workout(&input("Yoga", "Jog", 0)),
        Err(ValidationError::InvalidDuration)
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(ValidationError::ExerciseRequired.to_string(), "exercise required");
    assert_eq!(
        ValidationError::InvalidDuration.to_string(),
        "duration must be a positive integer"
    );
}

#[test]
fn test_json_payload_defaults_category() {
    let payload: WorkoutInput =
        serde_json::from_str(r#"{"exercise": "Jog", "duration": "15"}"#).unwrap();
    assert_eq!(payload.category, "Workout");

    let workout = validate_workout(&payload).unwrap();
    assert_eq!(workout.category, Category::Workout);
    assert_eq!(workout.duration_minutes, 15);

    let numeric: WorkoutInput =
        serde_json::from_str(r#"{"category": "Warm-up", "exercise": "Jog", "duration": 15}"#)
            .unwrap();
    assert_eq!(numeric.duration, FieldValue::Integer(15));
}
