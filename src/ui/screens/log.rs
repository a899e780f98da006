//! Workout logging screen.

use egui::{RichText, ScrollArea, Ui};

use super::StatusMessage;
use crate::ui::theme::{category_color, Theme};
use crate::workouts::log::WorkoutLog;
use crate::workouts::types::{Category, WorkoutInput};

/// Actions emitted by the log screen.
#[derive(Debug, Clone, PartialEq)]
pub enum LogAction {
    /// Submit a new entry
    Add(WorkoutInput),
}

/// Workout logging form and recent entries.
#[derive(Debug, Default)]
pub struct LogScreen {
    category: Category,
    exercise: String,
    duration: String,
    status: Option<StatusMessage>,
}

impl LogScreen {
    /// Create a new log screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the outcome of the last submission.
    pub fn set_status(&mut self, status: StatusMessage) {
        if matches!(status, StatusMessage::Success(_)) {
            self.exercise.clear();
            self.duration.clear();
        }
        self.status = Some(status);
    }

    /// Render the screen.
    pub fn show(&mut self, ui: &mut Ui, log: &WorkoutLog, theme: Theme) -> Option<LogAction> {
        let mut action = None;

        ui.heading("Log a Session");
        ui.add_space(12.0);

        egui::Grid::new("log_form")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Category:");
                egui::ComboBox::from_id_salt("log_category")
                    .selected_text(self.category.label())
                    .show_ui(ui, |ui| {
                        for category in Category::ALL {
                            ui.selectable_value(&mut self.category, category, category.label());
                        }
                    });
                ui.end_row();

                ui.label("Exercise:");
                ui.text_edit_singleline(&mut self.exercise);
                ui.end_row();

                ui.label("Duration (min):");
                ui.text_edit_singleline(&mut self.duration);
                ui.end_row();
            });

        ui.add_space(12.0);

        if ui.button("Add Session").clicked() {
            action = Some(LogAction::Add(WorkoutInput::new(
                self.category.label(),
                self.exercise.clone(),
                self.duration.clone(),
            )));
        }

        if let Some(status) = &self.status {
            ui.add_space(8.0);
            match status {
                StatusMessage::Success(msg) => ui.colored_label(theme.success(), msg),
                StatusMessage::Error(msg) => ui.colored_label(theme.error(), msg),
            };
        }

        ui.add_space(16.0);
        ui.separator();
        ui.label(RichText::new(format!("Logged sessions: {}", log.len())).strong());

        ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
            for (category, entries) in log.sessions() {
                if entries.is_empty() {
                    continue;
                }
                ui.add_space(6.0);
                ui.label(
                    RichText::new(category.label())
                        .color(category_color(*category))
                        .strong(),
                );
                for entry in entries {
                    let calories = entry
                        .calories
                        .map(|k| format!(" | {:.1} kcal", k))
                        .unwrap_or_default();
                    ui.label(format!(
                        "{}  {} - {} min{}",
                        entry.timestamp_display(),
                        entry.exercise,
                        entry.duration_minutes,
                        calories
                    ));
                }
            }
        });

        action
    }
}
