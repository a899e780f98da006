//! Read-only summaries over a [`WorkoutLog`].
//!
//! Every function borrows the log immutably, so repeated calls without an
//! intervening append return identical results. Empty input sums to zero.

use crate::metrics::calculator::round_to;
use crate::workouts::log::{Sessions, WorkoutLog};
use crate::workouts::types::{Category, WorkoutEntry};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Running duration and calorie sums; untracked calories count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Sums {
    duration: u64,
    calories: f64,
}

impl Sums {
    fn of(entries: &[WorkoutEntry]) -> Self {
        entries.iter().fold(Self::default(), |acc, e| Self {
            duration: acc.duration + e.duration_minutes as u64,
            calories: acc.calories + e.calories_or_zero(),
        })
    }

    fn add(self, other: Self) -> Self {
        Self {
            duration: self.duration + other.duration,
            calories: self.calories + other.calories,
        }
    }
}

/// Duration and calorie totals for one category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CategoryTotals {
    /// Total minutes
    pub duration: u64,
    /// Total calories, present only when calories are tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

impl CategoryTotals {
    /// Sum a slice of entries, keeping calories only if `tracks_calories`.
    pub fn of(entries: &[WorkoutEntry], tracks_calories: bool) -> Self {
        let sums = Sums::of(entries);
        Self {
            duration: sums.duration,
            calories: tracks_calories.then_some(sums.calories),
        }
    }

    /// Calories rounded for display.
    pub fn calories_display(&self) -> Option<f64> {
        self.calories.map(|kcal| round_to(kcal, 1))
    }
}

/// Summary of a whole log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Sum of all durations
    pub total_duration: u64,
    /// Per-category sums; every category is present
    pub category_totals: BTreeMap<Category, CategoryTotals>,
    /// Sum of all calories, present when the log tracks calories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_calories: Option<f64>,
}

impl Summary {
    /// Minutes logged in one category.
    pub fn duration_of(&self, category: Category) -> u64 {
        self.category_totals
            .get(&category)
            .map_or(0, |totals| totals.duration)
    }

    /// Total calories rounded for display.
    pub fn total_calories_display(&self) -> Option<f64> {
        self.total_calories.map(|kcal| round_to(kcal, 1))
    }
}

/// Totals for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub duration: u64,
    pub calories: f64,
}

/// Calories logged over a 7-day window against the weekly goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyProgress {
    /// First day of the window (inclusive)
    pub start: NaiveDate,
    /// Last day of the window (inclusive)
    pub end: NaiveDate,
    /// Minutes logged in the window
    pub duration: u64,
    /// Calories logged in the window
    pub calories: f64,
    /// Weekly calorie goal
    pub goal: u32,
}

impl WeeklyProgress {
    /// Fraction of the goal reached, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.goal == 0 {
            return 1.0;
        }
        (self.calories / self.goal as f64).clamp(0.0, 1.0)
    }

    /// Percentage of the goal reached, unclamped.
    pub fn percent_of_goal(&self) -> f64 {
        if self.goal == 0 {
            return 100.0;
        }
        self.calories / self.goal as f64 * 100.0
    }

    /// Calories still needed to reach the goal.
    pub fn remaining(&self) -> f64 {
        (self.goal as f64 - self.calories).max(0.0)
    }
}

fn sum_sessions(sessions: &Sessions) -> Sums {
    sessions
        .values()
        .map(|entries| Sums::of(entries))
        .fold(Sums::default(), Sums::add)
}

/// Summarize the whole log.
pub fn get_summary(log: &WorkoutLog) -> Summary {
    let tracks_calories = log.tracks_calories();
    let category_totals: BTreeMap<Category, CategoryTotals> = Category::ALL
        .into_iter()
        .map(|c| (c, CategoryTotals::of(log.entries(c), tracks_calories)))
        .collect();

    let overall = Category::ALL
        .into_iter()
        .map(|c| Sums::of(log.entries(c)))
        .fold(Sums::default(), Sums::add);

    let summary = Summary {
        total_duration: overall.duration,
        category_totals,
        total_calories: tracks_calories.then_some(overall.calories),
    };

    tracing::debug!(
        total_duration = summary.total_duration,
        total_calories = ?summary.total_calories,
        "Computed summary"
    );

    summary
}

/// Minutes per category, for charting.
pub fn progress(log: &WorkoutLog) -> BTreeMap<Category, u64> {
    Category::ALL
        .into_iter()
        .map(|c| (c, Sums::of(log.entries(c)).duration))
        .collect()
}

/// Totals for each day that has entries, oldest first.
pub fn daily_totals(log: &WorkoutLog) -> Vec<DailyTotals> {
    log.daily()
        .iter()
        .map(|(date, sessions)| {
            let totals = sum_sessions(sessions);
            DailyTotals {
                date: *date,
                duration: totals.duration,
                calories: totals.calories,
            }
        })
        .collect()
}

/// Progress over the 7 days ending on `today`.
pub fn weekly_progress(log: &WorkoutLog, goal: u32, today: NaiveDate) -> WeeklyProgress {
    let start = today - Duration::days(6);
    let totals = log
        .daily()
        .range(start..=today)
        .map(|(_, sessions)| sum_sessions(sessions))
        .fold(Sums::default(), Sums::add);

    WeeklyProgress {
        start,
        end: today,
        duration: totals.duration,
        calories: totals.calories,
        goal,
    }
}
