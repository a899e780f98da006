//! Input validation for workout and profile fields.
//!
//! Every function here is pure: it inspects the raw input and either returns
//! the normalized value or a [`ValidationError`]. Nothing is mutated, so a
//! rejected payload can never leave a partial entry behind.

use crate::workouts::types::{Category, FieldValue, ValidationError, WorkoutInput};

/// A workout payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedWorkout {
    /// Resolved category
    pub category: Category,
    /// Trimmed exercise name
    pub exercise: String,
    /// Duration in whole minutes
    pub duration_minutes: u32,
}

/// Validate a raw workout payload.
///
/// Checks run in a fixed order: exercise, duration, category.
pub fn validate_workout(input: &WorkoutInput) -> Result<ValidatedWorkout, ValidationError> {
    let exercise = parse_exercise(&input.exercise)?;
    let duration_minutes = parse_duration(&input.duration)?;
    let category = parse_category(&input.category)?;

    Ok(ValidatedWorkout {
        category,
        exercise,
        duration_minutes,
    })
}

/// Trim an exercise name and reject it if nothing remains.
pub fn parse_exercise(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::ExerciseRequired);
    }
    Ok(trimmed.to_string())
}

/// Parse a duration in minutes.
///
/// Fractional amounts are rejected rather than truncated; `30.0` counts as
/// the integer 30.
pub fn parse_duration(raw: &FieldValue) -> Result<u32, ValidationError> {
    integral_value(raw)
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or(ValidationError::InvalidDuration)
}

/// Resolve a category label. Labels are matched exactly.
pub fn parse_category(raw: &str) -> Result<Category, ValidationError> {
    Category::from_label(raw).ok_or_else(|| ValidationError::InvalidCategory {
        value: raw.to_string(),
    })
}

/// Require a non-blank text field, returning it trimmed.
pub fn parse_required_text(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Parse a strictly positive, finite real number.
pub fn parse_positive_real(field: &'static str, raw: &FieldValue) -> Result<f64, ValidationError> {
    if raw.is_blank() {
        return Err(ValidationError::MissingField { field });
    }

    let value = match raw {
        FieldValue::Integer(v) => Some(*v as f64),
        FieldValue::Real(v) => Some(*v),
        FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
    };

    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| ValidationError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

/// Parse a strictly positive real no greater than `max`.
pub fn parse_bounded_real(
    field: &'static str,
    raw: &FieldValue,
    max: f64,
) -> Result<f64, ValidationError> {
    let value = parse_positive_real(field, raw)?;
    if value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value: raw.to_string(),
            max,
        });
    }
    Ok(value)
}

/// Parse a strictly positive integer.
pub fn parse_positive_integer(
    field: &'static str,
    raw: &FieldValue,
) -> Result<u32, ValidationError> {
    if raw.is_blank() {
        return Err(ValidationError::MissingField { field });
    }

    integral_value(raw)
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| ValidationError::InvalidInteger {
            field,
            value: raw.to_string(),
        })
}

/// Interpret a raw value as an integer, if it denotes one exactly.
fn integral_value(raw: &FieldValue) -> Option<i64> {
    match raw {
        FieldValue::Integer(v) => Some(*v),
        FieldValue::Real(v) => real_to_integer(*v),
        FieldValue::Text(s) => integer_text(s.trim()),
    }
}

/// Accept `[+-]digits` with an optional all-zero fraction such as `30.0`.
fn integer_text(s: &str) -> Option<i64> {
    let whole = match s.split_once('.') {
        Some((whole, frac)) if !frac.is_empty() && frac.bytes().all(|b| b == b'0') => whole,
        Some(_) => return None,
        None => s,
    };
    let digits = whole.strip_prefix(['+', '-']).unwrap_or(whole);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    whole.parse::<i64>().ok()
}

fn real_to_integer(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}
