//! Reusable UI widgets.

pub mod metric_display;
pub mod progress_chart;

pub use metric_display::MetricDisplay;
pub use progress_chart::ProgressChart;
