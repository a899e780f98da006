//! Workout plan and diet guide screen.

use egui::{RichText, Ui};

use crate::workouts::plans::{Plan, DIET_PLANS, WORKOUT_PLANS};

/// Plans screen UI.
pub struct PlansScreen;

impl PlansScreen {
    /// Render both catalogs.
    pub fn show(ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Workout Plan");
            ui.add_space(8.0);
            show_plans(ui, WORKOUT_PLANS);

            ui.add_space(16.0);
            ui.heading("Diet Guide");
            ui.add_space(8.0);
            show_plans(ui, DIET_PLANS);
        });
    }
}

fn show_plans(ui: &mut Ui, plans: &[Plan]) {
    for plan in plans {
        ui.collapsing(RichText::new(plan.title).strong(), |ui| {
            for item in plan.items {
                ui.label(format!("• {}", item));
            }
        });
    }
}
