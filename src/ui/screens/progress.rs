//! Progress tracker screen: category chart, daily history and weekly goal.

use egui::{RichText, ScrollArea, Ui};
use std::collections::BTreeMap;

use crate::metrics::aggregator::{DailyTotals, WeeklyProgress};
use crate::metrics::calculator::round_to;
use crate::ui::widgets::ProgressChart;
use crate::workouts::types::Category;

/// Actions emitted by the progress screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressAction {
    /// Save the weekly report
    ExportWeeklyReport,
}

/// Progress screen UI.
pub struct ProgressScreen;

impl ProgressScreen {
    /// Render charts and goal progress.
    pub fn show(
        ui: &mut Ui,
        totals: &BTreeMap<Category, u64>,
        daily: &[DailyTotals],
        week: &WeeklyProgress,
    ) -> Option<ProgressAction> {
        let mut action = None;

        ui.heading("Progress Tracker");
        ui.add_space(12.0);

        ProgressChart::new(totals).height(220.0).show(ui);

        ui.add_space(16.0);
        ui.label(RichText::new("Weekly Calorie Goal").strong().size(16.0));
        ui.label(format!("{} to {}", week.start, week.end));
        ui.add(
            egui::ProgressBar::new(week.fraction() as f32)
                .desired_width(360.0)
                .text(format!(
                    "{:.1} / {} kcal ({:.0}%)",
                    round_to(week.calories, 1),
                    week.goal,
                    week.percent_of_goal()
                )),
        );
        ui.label(format!(
            "{} min this week, {:.1} kcal to go",
            week.duration,
            round_to(week.remaining(), 1)
        ));

        ui.add_space(16.0);
        ui.separator();
        ui.label(RichText::new("Daily History").strong());

        if daily.is_empty() {
            ui.label(RichText::new("No sessions yet").weak());
        } else {
            ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                egui::Grid::new("daily_history")
                    .num_columns(3)
                    .striped(true)
                    .show(ui, |ui| {
                        for day in daily.iter().rev() {
                            ui.label(day.date.format("%a %Y-%m-%d").to_string());
                            ui.label(format!("{} min", day.duration));
                            ui.label(format!("{:.1} kcal", round_to(day.calories, 1)));
                            ui.end_row();
                        }
                    });
            });
        }

        ui.add_space(16.0);
        if ui.button("Export Weekly Report").clicked() {
            action = Some(ProgressAction::ExportWeeklyReport);
        }

        action
    }
}
