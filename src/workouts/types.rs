//! Workout types and enums.
//!
//! Defines the fixed workout categories, the logged entry record, the raw
//! input payload accepted from a front end and the validation error taxonomy.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed workout phase classification.
///
/// The declaration order is the display order used by summaries and charts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Category {
    /// Light activity raising heart rate
    #[serde(rename = "Warm-up")]
    WarmUp,
    /// Main training block
    #[default]
    #[serde(rename = "Workout")]
    Workout,
    /// Gradual return to rest
    #[serde(rename = "Cool-down")]
    CoolDown,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::WarmUp, Category::Workout, Category::CoolDown];

    /// Label shown to users and used on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Category::WarmUp => "Warm-up",
            Category::Workout => "Workout",
            Category::CoolDown => "Cool-down",
        }
    }

    /// Look up a category by its exact label.
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single logged exercise. Never modified after it is appended to a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Exercise name, trimmed and non-empty
    pub exercise: String,
    /// Duration in whole minutes (> 0)
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Estimated calories burned, present when calorie tracking is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Creation time
    pub timestamp: DateTime<Local>,
}

impl WorkoutEntry {
    /// Calories counted by aggregation (missing values count as zero).
    pub fn calories_or_zero(&self) -> f64 {
        self.calories.unwrap_or(0.0)
    }

    /// Timestamp formatted for display.
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// A raw scalar as typed by a user or sent in a JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integral JSON number
    Integer(i64),
    /// Non-integral JSON number
    Real(f64),
    /// Text, e.g. from an input box
    Text(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Whether the value is absent (empty or whitespace-only text).
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Real(v) => write!(f, "{}", v),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Real(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

fn default_category() -> String {
    Category::default().label().to_string()
}

/// Unvalidated workout payload from a front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutInput {
    /// Category label; `Workout` when omitted
    #[serde(default = "default_category")]
    pub category: String,
    /// Exercise name as typed
    #[serde(default)]
    pub exercise: String,
    /// Duration in minutes as typed
    #[serde(default)]
    pub duration: FieldValue,
}

impl WorkoutInput {
    /// Create a new input payload.
    pub fn new(
        category: impl Into<String>,
        exercise: impl Into<String>,
        duration: impl Into<FieldValue>,
    ) -> Self {
        Self {
            category: category.into(),
            exercise: exercise.into(),
            duration: duration.into(),
        }
    }
}

/// Caller-recoverable rejection of malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("exercise required")]
    ExerciseRequired,

    #[error("duration must be a positive integer")]
    InvalidDuration,

    #[error("invalid category")]
    InvalidCategory { value: String },

    #[error("gender must be M or F")]
    InvalidGender { value: String },

    #[error("{field} required")]
    MissingField { field: &'static str },

    #[error("{field} must be a positive number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a positive integer")]
    InvalidInteger { field: &'static str, value: String },

    #[error("{field} must be at most {max}")]
    OutOfRange {
        field: &'static str,
        value: String,
        max: f64,
    },
}
