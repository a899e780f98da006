//! User info screen with BMI and BMR.

use egui::{RichText, Ui};

use super::StatusMessage;
use crate::storage::profile::{ProfileInput, UserProfile};
use crate::ui::theme::Theme;
use crate::ui::widgets::MetricDisplay;

/// Actions emitted by the profile screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    /// Validate and store the form
    Save(ProfileInput),
}

/// Profile form state.
#[derive(Debug, Default)]
pub struct ProfileScreen {
    name: String,
    regn_id: String,
    age: String,
    gender: String,
    height: String,
    weight: String,
    status: Option<StatusMessage>,
}

impl ProfileScreen {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the outcome of the last save.
    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    fn input(&self) -> ProfileInput {
        ProfileInput {
            name: self.name.clone(),
            regn_id: self.regn_id.clone(),
            age: self.age.clone().into(),
            gender: self.gender.clone(),
            height: self.height.clone().into(),
            weight: self.weight.clone().into(),
        }
    }

    /// Render the form and the saved profile.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        profile: Option<&UserProfile>,
        theme: Theme,
    ) -> Option<ProfileAction> {
        let mut action = None;

        ui.heading("User Info");
        ui.add_space(12.0);

        egui::Grid::new("profile_form")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut self.name);
                ui.end_row();

                ui.label("Registration ID:");
                ui.text_edit_singleline(&mut self.regn_id);
                ui.end_row();

                ui.label("Age:");
                ui.text_edit_singleline(&mut self.age);
                ui.end_row();

                ui.label("Gender (M/F):");
                ui.text_edit_singleline(&mut self.gender);
                ui.end_row();

                ui.label("Height (cm):");
                ui.text_edit_singleline(&mut self.height);
                ui.end_row();

                ui.label("Weight (kg):");
                ui.text_edit_singleline(&mut self.weight);
                ui.end_row();
            });

        ui.add_space(12.0);
        if ui.button("Save Profile").clicked() {
            action = Some(ProfileAction::Save(self.input()));
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

        match profile {
            Some(profile) => {
                ui.label(
                    RichText::new(format!("{} ({})", profile.name, profile.regn_id)).strong(),
                );
                ui.label(format!(
                    "Age {} | {} | {} cm | {} kg",
                    profile.age, profile.gender, profile.height_cm, profile.weight_kg
                ));
                ui.horizontal(|ui| {
                    MetricDisplay::bmi(Some(profile.bmi_display()))
                        .with_color(theme.bmi_color(profile.bmi))
                        .show(ui);
                    ui.separator();
                    MetricDisplay::bmr(Some(profile.bmr_display())).show(ui);
                });
                ui.label(format!(
                    "Weekly calorie goal: {} kcal",
                    profile.weekly_calorie_goal
                ));
            }
            None => {
                ui.label(RichText::new("No profile saved. Calories use a 70 kg default.").weak());
            }
        }

        action
    }
}
