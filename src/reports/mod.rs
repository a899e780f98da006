//! Report generation for logged workouts.

pub mod exporter_csv;
pub mod exporter_json;
pub mod weekly;

pub use exporter_csv::{export_log_csv, export_log_csv_to_file, generate_csv_filename};
pub use exporter_json::{export_summary_json, export_summary_json_to_file};
pub use weekly::{export_weekly_report, export_weekly_report_to_file, generate_report_filename};

use thiserror::Error;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A report needs a saved profile
    #[error("Please save user info before exporting a report")]
    NoProfile,

    /// Nothing has been logged
    #[error("No workouts to export")]
    NoData,

    /// Failed to format export data
    #[error("Failed to write data: {0}")]
    WriteFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Quote a CSV field when it contains a separator, quote or newline.
pub(crate) fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
