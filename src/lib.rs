//! ACEest Fitness & Gym - workout logging and body metrics.
//!
//! The library holds the metrics engine: input validation, calorie / BMI /
//! BMR formulas and log aggregation. Front ends own an [`AppContext`] and
//! call into it; the desktop UI in the `ui` module is one such front end.

pub mod context;
pub mod metrics;
pub mod reports;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use context::AppContext;
pub use metrics::{get_summary, Summary};
pub use storage::{get_profile, save_profile, ProfileInput, ProfileStore, UserProfile};
pub use workouts::{add_entry, Category, ValidationError, WorkoutEntry, WorkoutInput, WorkoutLog};
