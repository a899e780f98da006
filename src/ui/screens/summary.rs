//! Summary screen with per-category totals.

use egui::{RichText, Ui};

use crate::metrics::aggregator::Summary;
use crate::ui::theme::category_color;
use crate::ui::widgets::MetricDisplay;
use crate::workouts::types::Category;

/// Actions emitted by the summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryAction {
    /// Save every entry as CSV
    ExportCsv,
    /// Save the summary as JSON
    ExportJson,
}

/// Summary screen UI.
pub struct SummaryScreen;

impl SummaryScreen {
    /// Render the summary.
    pub fn show(ui: &mut Ui, summary: &Summary) -> Option<SummaryAction> {
        let mut action = None;

        ui.heading("Session Summary");
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            MetricDisplay::minutes(summary.total_duration, "Total Time").show(ui);
            ui.separator();
            MetricDisplay::calories(summary.total_calories_display(), "Total Calories").show(ui);
        });

        ui.add_space(12.0);
        ui.separator();

        egui::Grid::new("summary_table")
            .num_columns(3)
            .striped(true)
            .spacing([40.0, 8.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Category").strong());
                ui.label(RichText::new("Minutes").strong());
                ui.label(RichText::new("Calories").strong());
                ui.end_row();

                for category in Category::ALL {
                    let totals = summary
                        .category_totals
                        .get(&category)
                        .copied()
                        .unwrap_or_default();
                    ui.label(
                        RichText::new(category.label()).color(category_color(category)),
                    );
                    ui.label(totals.duration.to_string());
                    match totals.calories_display() {
                        Some(kcal) => ui.label(format!("{:.1}", kcal)),
                        None => ui.label("--"),
                    };
                    ui.end_row();
                }
            });

        ui.add_space(16.0);

        let motivation = match summary.total_duration {
            0 => "Log your first session to get started!",
            1..=29 => "Good start! Keep moving.",
            30..=59 => "Nice effort! You're building consistency.",
            _ => "Excellent dedication! Keep up the great work.",
        };
        ui.label(RichText::new(motivation).italics());

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("Export Log (CSV)").clicked() {
                action = Some(SummaryAction::ExportCsv);
            }
            if ui.button("Export Summary (JSON)").clicked() {
                action = Some(SummaryAction::ExportJson);
            }
        });

        action
    }
}
