//! Metrics module for derived body and training metrics.

pub mod aggregator;
pub mod calculator;

pub use aggregator::{
    daily_totals, get_summary, progress, weekly_progress, CategoryTotals, DailyTotals, Summary,
    WeeklyProgress,
};
pub use calculator::{bmi, bmr, calories, met_for, round_to};
