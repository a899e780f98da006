//! Derived-metric formulas: calories burned, BMI and BMR.
//!
//! All functions are pure and keep full precision; use [`round_to`] only
//! when presenting a value.

use crate::storage::profile::Gender;
use crate::workouts::types::Category;

/// MET value for warm-up activity.
pub const MET_WARM_UP: f64 = 3.0;
/// MET value for the main workout block.
pub const MET_WORKOUT: f64 = 6.0;
/// MET value for cool-down activity.
pub const MET_COOL_DOWN: f64 = 2.5;
/// MET value used for labels outside the fixed category set.
pub const MET_DEFAULT: f64 = 5.0;

/// Body weight assumed when no profile has been saved.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// MET value for a category.
pub fn met_for(category: Category) -> f64 {
    match category {
        Category::WarmUp => MET_WARM_UP,
        Category::Workout => MET_WORKOUT,
        Category::CoolDown => MET_COOL_DOWN,
    }
}

/// MET value for a category label, falling back to [`MET_DEFAULT`].
pub fn met_for_label(label: &str) -> f64 {
    Category::from_label(label).map_or(MET_DEFAULT, met_for)
}

/// Estimate calories burned.
///
/// `kcal = MET × 3.5 × weight_kg / 200 × minutes`
pub fn calories(weight_kg: f64, met: f64, duration_min: u32) -> f64 {
    (met * 3.5 * weight_kg / 200.0) * duration_min as f64
}

/// Body Mass Index.
///
/// Both arguments must be positive; the profile validator guarantees this
/// before any call.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal Metabolic Rate (Mifflin-St Jeor).
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Round to a fixed number of decimal places for display.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
