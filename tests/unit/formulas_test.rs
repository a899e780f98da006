//! Unit tests for calorie, BMI and BMR formulas.

use aceest::metrics::calculator::{
    met_for, met_for_label, DEFAULT_WEIGHT_KG, MET_COOL_DOWN, MET_DEFAULT, MET_WARM_UP,
    MET_WORKOUT,
};
use aceest::metrics::{bmi, bmr, calories, round_to};
use aceest::storage::Gender;
use aceest::workouts::Category;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_met_table() {
    assert_close(met_for(Category::WarmUp), MET_WARM_UP);
    assert_close(met_for(Category::Workout), MET_WORKOUT);
    assert_close(met_for(Category::CoolDown), MET_COOL_DOWN);
    assert_close(met_for_label("Cool-down"), 2.5);
    assert_close(met_for_label("Pilates"), MET_DEFAULT);
    assert_close(DEFAULT_WEIGHT_KG, 70.0);
}

#[test]
fn test_calories_formula() {
    // MET * 3.5 * kg / 200 per minute
    assert_close(calories(70.0, 6.0, 30), 220.5);
    assert_close(calories(70.0, 3.0, 10), 36.75);
    assert_close(calories(80.0, 2.5, 0), 0.0);
}

#[test]
fn test_calories_scale_linearly_with_duration() {
    let one = calories(65.0, 6.0, 1);
    assert_close(calories(65.0, 6.0, 45), one * 45.0);
}

#[test]
fn test_bmi() {
    assert_close(round_to(bmi(175.0, 70.0), 3), 22.857);
    assert_close(round_to(bmi(180.0, 81.0), 1), 25.0);
}

#[test]
fn test_bmr_by_gender() {
    let male = bmr(70.0, 175.0, 30, Gender::Male);
    let female = bmr(70.0, 175.0, 30, Gender::Female);

    assert_close(male, 1648.75);
    assert_close(female, 1482.75);
    assert_close(male - female, 166.0);
}

#[test]
fn test_round_to() {
    assert_close(round_to(22.857_142, 1), 22.9);
    assert_close(round_to(1648.75, 0), 1649.0);
    assert_close(round_to(3.0, 2), 3.0);
}
