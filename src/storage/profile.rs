//! User profile with body measurements and derived BMI/BMR.
//!
//! At most one profile exists per [`ProfileStore`]. Saving replaces it
//! wholesale; there is no merge and no history.

use crate::metrics::calculator;
use crate::workouts::types::{FieldValue, ValidationError};
use crate::workouts::validator::{parse_bounded_real, parse_positive_integer, parse_required_text};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weekly calorie goal assigned to new profiles.
pub const DEFAULT_WEEKLY_CALORIE_GOAL: u32 = 2000;

/// Largest accepted height in centimetres.
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Largest accepted weight in kilograms.
pub const MAX_WEIGHT_KG: f64 = 700.0;

/// Gender used by the BMR formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Parse user input, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Gender, ValidationError> {
        match raw.trim().to_uppercase().as_str() {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            _ => Err(ValidationError::InvalidGender {
                value: raw.to_string(),
            }),
        }
    }

    /// Single-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Saved user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Gym registration id
    pub regn_id: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Body Mass Index, full precision
    pub bmi: f64,
    /// Basal Metabolic Rate in kcal/day, full precision
    pub bmr: f64,
    /// Weekly calorie burn goal
    pub weekly_calorie_goal: u32,
    /// When the profile was saved
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// BMI rounded to one decimal.
    pub fn bmi_display(&self) -> f64 {
        calculator::round_to(self.bmi, 1)
    }

    /// BMR rounded to whole kcal.
    pub fn bmr_display(&self) -> f64 {
        calculator::round_to(self.bmr, 0)
    }
}

/// Raw profile form as submitted by a front end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub name: String,
    pub regn_id: String,
    pub age: FieldValue,
    pub gender: String,
    #[serde(alias = "height_cm")]
    pub height: FieldValue,
    #[serde(alias = "weight_kg")]
    pub weight: FieldValue,
}

/// Holder of the single current profile.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profile: Option<UserProfile>,
    weekly_calorie_goal: u32,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::with_weekly_goal(DEFAULT_WEEKLY_CALORIE_GOAL)
    }
}

impl ProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store whose saved profiles carry the given goal.
    pub fn with_weekly_goal(weekly_calorie_goal: u32) -> Self {
        Self {
            profile: None,
            weekly_calorie_goal,
        }
    }

    /// The current profile, if one has been saved.
    pub fn current(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Whether a profile has been saved.
    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
    }

    /// Weight to use for calorie estimates.
    pub fn weight_kg(&self) -> Option<f64> {
        self.profile.as_ref().map(|p| p.weight_kg)
    }
}

/// Validate a profile form and replace the stored profile.
///
/// On error the store is left untouched.
pub fn save_profile(
    store: &mut ProfileStore,
    input: &ProfileInput,
) -> Result<UserProfile, ValidationError> {
    let profile = build_profile(input, store.weekly_calorie_goal).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected profile");
    })?;

    tracing::info!(
        regn_id = %profile.regn_id,
        bmi = profile.bmi_display(),
        bmr = profile.bmr_display(),
        "Saved user profile"
    );

    store.profile = Some(profile.clone());
    Ok(profile)
}

/// Get the stored profile, or `None` before the first save.
pub fn get_profile(store: &ProfileStore) -> Option<&UserProfile> {
    store.current()
}

fn build_profile(
    input: &ProfileInput,
    weekly_calorie_goal: u32,
) -> Result<UserProfile, ValidationError> {
    let name = parse_required_text("name", &input.name)?;
    let regn_id = parse_required_text("regn_id", &input.regn_id)?;
    let age = parse_positive_integer("age", &input.age)?;
    let gender_raw = parse_required_text("gender", &input.gender)?;
    let gender = Gender::parse(&gender_raw)?;
    let height_cm = parse_bounded_real("height", &input.height, MAX_HEIGHT_CM)?;
    let weight_kg = parse_bounded_real("weight", &input.weight, MAX_WEIGHT_KG)?;

    // A vanishingly small height still overflows the BMI.
    let bmi = calculator::bmi(height_cm, weight_kg);
    if !bmi.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: "height",
            value: input.height.to_string(),
        });
    }

    Ok(UserProfile {
        name,
        regn_id,
        age,
        gender,
        height_cm,
        weight_kg,
        bmi,
        bmr: calculator::bmr(weight_kg, height_cm, age, gender),
        weekly_calorie_goal,
        updated_at: Utc::now(),
    })
}
