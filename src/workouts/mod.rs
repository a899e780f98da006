//! Workout logging: entry types, validation, the in-memory log and plan catalogs.

pub mod log;
pub mod plans;
pub mod types;
pub mod validator;

pub use log::{add_entry, add_entry_at, Sessions, WorkoutLog};
pub use plans::{Plan, DIET_PLANS, WORKOUT_PLANS};
pub use types::{Category, FieldValue, ValidationError, WorkoutEntry, WorkoutInput};
pub use validator::{validate_workout, ValidatedWorkout};
