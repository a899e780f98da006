//! Unit tests for the user profile store.

use aceest::storage::profile::MAX_WEIGHT_KG;
use aceest::storage::{get_profile, save_profile, Gender, ProfileInput, ProfileStore};
use aceest::workouts::ValidationError;

fn form() -> ProfileInput {
    ProfileInput {
        name: "Ravi Kumar".to_string(),
        regn_id: "ACE-042".to_string(),
        age: "30".into(),
        gender: "m".to_string(),
        height: "175".into(),
        weight: "70".into(),
    }
}

#[test]
fn test_save_and_get_profile() {
    let mut store = ProfileStore::new();
    assert!(get_profile(&store).is_none());

    let saved = save_profile(&mut store, &form()).unwrap();
    assert_eq!(saved.gender, Gender::Male);
    assert_eq!(saved.bmi_display(), 22.9);
    assert_eq!(saved.bmr_display(), 1649.0);
    assert_eq!(saved.weekly_calorie_goal, 2000);

    let current = get_profile(&store).unwrap();
    assert_eq!(current.name, "Ravi Kumar");
    assert_eq!(current.regn_id, "ACE-042");
}

#[test]
fn test_save_replaces_previous_profile() {
    let mut store = ProfileStore::new();
    save_profile(&mut store, &form()).unwrap();

    let mut second = form();
    second.name = "Meera".to_string();
    second.gender = "F".to_string();
    second.weight = 55.5.into();
    save_profile(&mut store, &second).unwrap();

    let current = get_profile(&store).unwrap();
    assert_eq!(current.name, "Meera");
    assert_eq!(current.gender, Gender::Female);
    assert_eq!(store.weight_kg(), Some(55.5));
}

#[test]
fn test_invalid_profile_keeps_existing() {
    let mut store = ProfileStore::new();
    save_profile(&mut store, &form()).unwrap();

    let mut bad = form();
    bad.name = "Someone Else".to_string();
    bad.gender = "X".to_string();
    assert!(matches!(
        save_profile(&mut store, &bad),
        Err(ValidationError::InvalidGender { .. })
    ));

    assert_eq!(get_profile(&store).unwrap().name, "Ravi Kumar");
}

#[test]
fn test_field_errors() {
    let mut store = ProfileStore::new();

    let mut missing = form();
    missing.name = "  ".to_string();
    assert_eq!(
        save_profile(&mut store, &missing),
        Err(ValidationError::MissingField { field: "name" })
    );

    let mut zero_age = form();
    zero_age.age = "0".into();
    assert!(matches!(
        save_profile(&mut store, &zero_age),
        Err(ValidationError::InvalidInteger { field: "age", .. })
    ));

    let mut bad_height = form();
    bad_height.height = "tall".into();
    let err = save_profile(&mut store, &bad_height).unwrap_err();
    assert_eq!(err.to_string(), "height must be a positive number");

    let mut no_weight = form();
    no_weight.weight = "".into();
    assert_eq!(
        save_profile(&mut store, &no_weight),
        Err(ValidationError::MissingField { field: "weight" })
    );

    assert!(store.is_empty());
}

#[test]
fn test_custom_weekly_goal() {
    let mut store = ProfileStore::with_weekly_goal(3500);
    let saved = save_profile(&mut store, &form()).unwrap();
    assert_eq!(saved.weekly_calorie_goal, 3500);
}

#[test]
fn test_out_of_range_measurements() {
    let mut store = ProfileStore::new();

    let mut heavy = form();
    heavy.weight = "1e308".into();
    assert_eq!(
        save_profile(&mut store, &heavy),
        Err(ValidationError::OutOfRange {
            field: "weight",
            value: "1e308".to_string(),
            max: MAX_WEIGHT_KG,
        })
    );

    let mut tall = form();
    tall.height = 1000.0.into();
    let err = save_profile(&mut store, &tall).unwrap_err();
    assert_eq!(err.to_string(), "height must be at most 300");

    let mut tiny = form();
    tiny.height = "1e-200".into();
    assert!(matches!(
        save_profile(&mut store, &tiny),
        Err(ValidationError::InvalidNumber { field: "height", .. })
    ));

    assert!(store.is_empty());

    let saved = save_profile(&mut store, &form()).unwrap();
    assert!(saved.bmi.is_finite() && saved.bmr.is_finite());
}

#[test]
fn test_age_text_must_be_plain_digits() {
    let mut store = ProfileStore::new();
    for raw in ["1e1", "3e1", "30."] {
        let mut input = form();
        input.age = raw.into();
        assert!(
            matches!(
                save_profile(&mut store, &input),
                Err(ValidationError::InvalidInteger { field: "age", .. })
            ),
            "{:?} should be rejected",
            raw
        );
    }
    assert!(store.is_empty());
}
