//! Application context owning all mutable state.
//!
//! The workout log and the profile store live here instead of in globals.
//! Callers that share a context across threads must serialize the mutating
//! calls (`add_entry`, `save_profile`) behind a single lock.

use crate::metrics::aggregator::{self, Summary, WeeklyProgress};
use crate::reports::{self, ExportError};
use crate::storage::config::AppConfig;
use crate::storage::profile::{self, ProfileInput, ProfileStore, UserProfile};
use crate::workouts::log::{self, WorkoutLog};
use crate::workouts::types::{ValidationError, WorkoutEntry, WorkoutInput};
use chrono::{Local, NaiveDate};

/// Owned state for one running front end.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: AppConfig,
    log: WorkoutLog,
    profiles: ProfileStore,
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppContext {
    /// Create an empty context from configuration.
    pub fn new(config: AppConfig) -> Self {
        let log = WorkoutLog::with_calorie_tracking(config.tracking.track_calories);
        let profiles = ProfileStore::with_weekly_goal(config.tracking.weekly_calorie_goal);
        Self {
            config,
            log,
            profiles,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The workout log.
    pub fn log(&self) -> &WorkoutLog {
        &self.log
    }

    /// The current profile.
    pub fn profile(&self) -> Option<&UserProfile> {
        profile::get_profile(&self.profiles)
    }

    /// Weight used for the next calorie estimate.
    pub fn effective_weight_kg(&self) -> f64 {
        self.profiles
            .weight_kg()
            .unwrap_or(self.config.tracking.default_weight_kg)
    }

    /// Validate and log a workout.
    pub fn add_entry(&mut self, input: &WorkoutInput) -> Result<WorkoutEntry, ValidationError> {
        let weight_kg = self.effective_weight_kg();
        log::add_entry_at(&mut self.log, input, weight_kg, Local::now())
    }

    /// Validate and replace the profile.
    pub fn save_profile(&mut self, input: &ProfileInput) -> Result<UserProfile, ValidationError> {
        profile::save_profile(&mut self.profiles, input)
    }

    /// Summary of the whole log.
    pub fn summary(&self) -> Summary {
        aggregator::get_summary(&self.log)
    }

    /// Calorie progress for the 7 days ending on `today`.
    pub fn weekly_progress(&self, today: NaiveDate) -> WeeklyProgress {
        let goal = self
            .profile()
            .map_or(self.config.tracking.weekly_calorie_goal, |p| {
                p.weekly_calorie_goal
            });
        aggregator::weekly_progress(&self.log, goal, today)
    }

    /// Weekly report text for the 7 days ending on `today`.
    pub fn weekly_report(&self, today: NaiveDate) -> Result<String, ExportError> {
        reports::export_weekly_report(self.profile(), &self.log, today)
    }
}
