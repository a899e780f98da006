//! Weekly progress report.
//!
//! Plain-text report with the profile, the 7-day window totals per
//! category, progress against the weekly calorie goal and every entry
//! logged in the window.

use crate::metrics::aggregator::{weekly_progress, CategoryTotals, WeeklyProgress};
use crate::metrics::calculator::round_to;
use crate::reports::{csv_field, ExportError};
use crate::storage::profile::UserProfile;
use crate::workouts::log::WorkoutLog;
use crate::workouts::types::{Category, WorkoutEntry};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Build the weekly report for the 7 days ending on `today`.
pub fn export_weekly_report(
    profile: Option<&UserProfile>,
    log: &WorkoutLog,
    today: NaiveDate,
) -> Result<String, ExportError> {
    let profile = profile.ok_or(ExportError::NoProfile)?;
    let week = weekly_progress(log, profile.weekly_calorie_goal, today);

    let mut by_category: BTreeMap<Category, Vec<&WorkoutEntry>> =
        Category::ALL.into_iter().map(|c| (c, Vec::new())).collect();
    for (_, sessions) in log.daily().range(week.start..=week.end) {
        for (category, entries) in sessions {
            by_category.entry(*category).or_default().extend(entries.iter());
        }
    }

    let mut out = String::new();
    write_report(&mut out, profile, &week, &by_category, log.tracks_calories())
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    tracing::debug!(
        start = %week.start,
        end = %week.end,
        calories = week.calories,
        "Built weekly report"
    );

    Ok(out)
}

fn write_report(
    out: &mut String,
    profile: &UserProfile,
    week: &WeeklyProgress,
    by_category: &BTreeMap<Category, Vec<&WorkoutEntry>>,
    tracks_calories: bool,
) -> std::fmt::Result {
    writeln!(out, "ACEest Fitness & Gym - Weekly Progress Report")?;
    writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M"))?;
    writeln!(out, "Period: {} to {}", week.start, week.end)?;
    writeln!(out)?;

    writeln!(out, "[Profile]")?;
    writeln!(out, "Name: {}", profile.name)?;
    writeln!(out, "Registration ID: {}", profile.regn_id)?;
    writeln!(out, "Age: {}", profile.age)?;
    writeln!(out, "Gender: {}", profile.gender)?;
    writeln!(out, "Height (cm): {}", profile.height_cm)?;
    writeln!(out, "Weight (kg): {}", profile.weight_kg)?;
    writeln!(out, "BMI: {:.1}", profile.bmi_display())?;
    writeln!(out, "BMR (kcal/day): {:.0}", profile.bmr_display())?;
    writeln!(out)?;

    writeln!(out, "[Summary]")?;
    writeln!(out, "category,duration_minutes,calories")?;
    let mut total = CategoryTotals {
        duration: 0,
        calories: tracks_calories.then_some(0.0),
    };
    for (category, entries) in by_category {
        let totals = CategoryTotals {
            duration: entries.iter().map(|e| e.duration_minutes as u64).sum(),
            calories: tracks_calories
                .then(|| entries.iter().map(|e| e.calories_or_zero()).sum()),
        };
        total.duration += totals.duration;
        total.calories = total.calories.zip(totals.calories).map(|(a, b)| a + b);
        writeln!(
            out,
            "{},{},{}",
            category,
            totals.duration,
            calories_field(&totals)
        )?;
    }
    writeln!(out, "Total,{},{}", total.duration, calories_field(&total))?;
    writeln!(out)?;

    writeln!(out, "[Weekly Goal]")?;
    writeln!(
        out,
        "Calories burned: {:.1} / {} kcal ({:.0}%)",
        round_to(week.calories, 1),
        week.goal,
        week.percent_of_goal()
    )?;
    writeln!(out, "Remaining: {:.1} kcal", round_to(week.remaining(), 1))?;
    writeln!(out)?;

    writeln!(out, "[Entries]")?;
    writeln!(out, "timestamp,category,exercise,duration_minutes,calories")?;
    for (category, entries) in by_category {
        for entry in entries {
            writeln!(
                out,
                "{},{},{},{},{}",
                entry.timestamp_display(),
                category,
                csv_field(&entry.exercise),
                entry.duration_minutes,
                entry
                    .calories
                    .map_or(String::new(), |v| format!("{:.1}", round_to(v, 1))),
            )?;
        }
    }

    Ok(())
}

fn calories_field(totals: &CategoryTotals) -> String {
    totals
        .calories_display()
        .map_or(String::new(), |kcal| format!("{:.1}", kcal))
}

/// Build the weekly report and write it to a file.
pub fn export_weekly_report_to_file(
    profile: Option<&UserProfile>,
    log: &WorkoutLog,
    today: NaiveDate,
    path: &std::path::Path,
) -> Result<(), ExportError> {
    let content = export_weekly_report(profile, log, today)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "Exported weekly report");
    Ok(())
}

/// Generate a default filename for a weekly report.
pub fn generate_report_filename(profile: &UserProfile, today: NaiveDate) -> String {
    let name: String = profile
        .name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}_weekly_report_{}.txt", name, today.format("%Y%m%d"))
}
