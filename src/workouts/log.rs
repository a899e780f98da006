//! In-memory workout log.
//!
//! The log is the only mutable workout store. Entries are appended per
//! category in insertion order and never edited or removed; the log lives
//! as long as its owner and is reset only by dropping it.

use crate::metrics::calculator::{self, DEFAULT_WEIGHT_KG};
use crate::storage::profile::UserProfile;
use crate::workouts::types::{Category, ValidationError, WorkoutEntry, WorkoutInput};
use crate::workouts::validator::validate_workout;
use chrono::{DateTime, Local, NaiveDate};
use std::collections::BTreeMap;

/// Entries grouped by category.
pub type Sessions = BTreeMap<Category, Vec<WorkoutEntry>>;

fn empty_sessions() -> Sessions {
    Category::ALL.into_iter().map(|c| (c, Vec::new())).collect()
}

/// Category-keyed workout store with a per-day index.
#[derive(Debug, Clone)]
pub struct WorkoutLog {
    /// All entries, every category always present
    sessions: Sessions,
    /// The same entries filed under the local date they were logged
    daily: BTreeMap<NaiveDate, Sessions>,
    /// Whether new entries get a calorie estimate
    track_calories: bool,
}

impl Default for WorkoutLog {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutLog {
    /// Create an empty log with calorie tracking enabled.
    pub fn new() -> Self {
        Self::with_calorie_tracking(true)
    }

    /// Create an empty log, choosing whether entries carry calories.
    pub fn with_calorie_tracking(track_calories: bool) -> Self {
        Self {
            sessions: empty_sessions(),
            daily: BTreeMap::new(),
            track_calories,
        }
    }

    /// Whether new entries get a calorie estimate.
    pub fn tracks_calories(&self) -> bool {
        self.track_calories
    }

    /// Entries of one category in insertion order.
    pub fn entries(&self, category: Category) -> &[WorkoutEntry] {
        self.sessions.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All categories with their entries, in display order.
    pub fn sessions(&self) -> &Sessions {
        &self.sessions
    }

    /// Iterate over every entry with its category.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &WorkoutEntry)> + '_ {
        self.sessions
            .iter()
            .flat_map(|(category, entries)| entries.iter().map(move |e| (*category, e)))
    }

    /// Total number of entries across categories.
    pub fn len(&self) -> usize {
        self.sessions.values().map(Vec::len).sum()
    }

    /// Whether nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-day index, ascending by date.
    pub fn daily(&self) -> &BTreeMap<NaiveDate, Sessions> {
        &self.daily
    }

    /// Entries logged on a given local date.
    pub fn entries_on(&self, date: NaiveDate) -> Option<&Sessions> {
        self.daily.get(&date)
    }

    fn append(&mut self, category: Category, entry: WorkoutEntry) {
        let date = entry.timestamp.date_naive();
        self.daily
            .entry(date)
            .or_insert_with(empty_sessions)
            .entry(category)
            .or_default()
            .push(entry.clone());
        self.sessions.entry(category).or_default().push(entry);
    }
}

/// Validate a workout and append it to the log.
///
/// Calories use the profile weight, or 70 kg when no profile is given.
pub fn add_entry(
    log: &mut WorkoutLog,
    input: &WorkoutInput,
    profile: Option<&UserProfile>,
) -> Result<WorkoutEntry, ValidationError> {
    let weight_kg = profile.map_or(DEFAULT_WEIGHT_KG, |p| p.weight_kg);
    add_entry_at(log, input, weight_kg, Local::now())
}

/// Validate a workout and append it with an explicit weight and timestamp.
///
/// Either the entry is appended in full or the log is left unchanged.
pub fn add_entry_at(
    log: &mut WorkoutLog,
    input: &WorkoutInput,
    weight_kg: f64,
    now: DateTime<Local>,
) -> Result<WorkoutEntry, ValidationError> {
    let workout = validate_workout(input).inspect_err(|e| {
        tracing::warn!(error = %e, category = %input.category, "Rejected workout entry");
    })?;

    let calories = log.track_calories.then(|| {
        calculator::calories(
            weight_kg,
            calculator::met_for(workout.category),
            workout.duration_minutes,
        )
    });

    let entry = WorkoutEntry {
        exercise: workout.exercise,
        duration_minutes: workout.duration_minutes,
        calories,
        timestamp: now,
    };

    tracing::debug!(
        category = %workout.category,
        exercise = %entry.exercise,
        duration = entry.duration_minutes,
        calories = ?entry.calories,
        "Logged workout"
    );

    log.append(workout.category, entry.clone());
    Ok(entry)
}
