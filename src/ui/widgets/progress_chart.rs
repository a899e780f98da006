//! Bar chart of minutes per category.

use egui::{Response, Ui};
use egui_plot::{Bar, BarChart, Plot};
use std::collections::BTreeMap;

use crate::ui::theme::category_color;
use crate::workouts::types::Category;

/// Category duration chart widget.
pub struct ProgressChart<'a> {
    /// Minutes per category
    totals: &'a BTreeMap<Category, u64>,
    /// Chart height
    height: f32,
}

impl<'a> ProgressChart<'a> {
    /// Create a new chart.
    pub fn new(totals: &'a BTreeMap<Category, u64>) -> Self {
        Self {
            totals,
            height: 240.0,
        }
    }

    /// Set chart height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Show the chart in the UI.
    pub fn show(self, ui: &mut Ui) -> Response {
        if self.totals.values().all(|minutes| *minutes == 0) {
            return ui.label("No workouts logged yet. Add some sessions to see your progress.");
        }

        let bars: Vec<Bar> = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let minutes = self.totals.get(category).copied().unwrap_or(0);
                Bar::new(i as f64, minutes as f64)
                    .name(category.label())
                    .fill(category_color(*category))
                    .width(0.6)
            })
            .collect();

        Plot::new("progress_chart")
            .height(self.height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_y(0.0)
            .y_axis_label("Minutes")
            .x_axis_formatter(|mark, _range| axis_label(mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("Minutes", bars));
            })
            .response
    }
}

/// Category label for an integral x position, blank elsewhere.
fn axis_label(x: f64) -> String {
    if x.fract() != 0.0 || x < 0.0 {
        return String::new();
    }
    Category::ALL
        .get(x as usize)
        .map(|c| c.label().to_string())
        .unwrap_or_default()
}
