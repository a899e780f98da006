//! Metric display widget for summary cards.

use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

/// A widget for displaying a single metric.
pub struct MetricDisplay<'a> {
    /// The metric value to display
    value: String,
    /// The unit label
    unit: &'a str,
    /// The metric name/label
    label: &'a str,
    /// Optional accent color
    color: Option<Color32>,
}

impl<'a> MetricDisplay<'a> {
    /// Create a new metric display.
    pub fn new(value: impl Into<String>, unit: &'a str, label: &'a str) -> Self {
        Self {
            value: value.into(),
            unit,
            label,
            color: None,
        }
    }

    /// Minutes of activity.
    pub fn minutes(minutes: u64, label: &'a str) -> Self {
        Self::new(minutes.to_string(), "min", label)
    }

    /// Calories, or a placeholder when not tracked.
    pub fn calories(kcal: Option<f64>, label: &'a str) -> Self {
        let value = kcal
            .map(|k| format!("{:.1}", k))
            .unwrap_or_else(|| "--".to_string());
        Self::new(value, "kcal", label)
    }

    /// Body Mass Index.
    pub fn bmi(bmi: Option<f64>) -> Self {
        let value = bmi
            .map(|b| format!("{:.1}", b))
            .unwrap_or_else(|| "--".to_string());
        Self::new(value, "", "BMI")
    }

    /// Basal Metabolic Rate.
    pub fn bmr(bmr: Option<f64>) -> Self {
        let value = bmr
            .map(|b| format!("{:.0}", b))
            .unwrap_or_else(|| "--".to_string());
        Self::new(value, "kcal/day", "BMR")
    }

    /// Set an accent color for the value.
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    /// Render the metric display.
    pub fn show(self, ui: &mut Ui) {
        egui::Frame::new().inner_margin(8.0).show(ui, |ui| {
            ui.set_min_size(Vec2::new(120.0, 70.0));

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.label(RichText::new(self.label).size(13.0).weak());

                ui.add_space(4.0);

                let value_text = RichText::new(&self.value).size(32.0).strong();
                let value_text = match self.color {
                    Some(color) => value_text.color(color),
                    None => value_text,
                };

                ui.horizontal(|ui| {
                    ui.label(value_text);
                    if !self.unit.is_empty() {
                        ui.label(RichText::new(self.unit).size(14.0).weak());
                    }
                });
            });
        });
    }
}
