//! CSV export of every logged entry.

use crate::reports::{csv_field, ExportError};
use crate::workouts::log::WorkoutLog;
use chrono::{DateTime, Local};
use std::io::Write;

/// Export all entries to CSV, one row per entry in category order.
pub fn export_log_csv(log: &WorkoutLog) -> Result<String, ExportError> {
    if log.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut output = Vec::new();

    writeln!(output, "timestamp,category,exercise,duration_minutes,calories")
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    for (category, entry) in log.iter() {
        writeln!(
            output,
            "{},{},{},{},{}",
            entry.timestamp_display(),
            category,
            csv_field(&entry.exercise),
            entry.duration_minutes,
            entry
                .calories
                .map_or(String::new(), |v| format!("{:.1}", v)),
        )
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    }

    String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Export all entries to a CSV file.
pub fn export_log_csv_to_file(log: &WorkoutLog, path: &std::path::Path) -> Result<(), ExportError> {
    let content = export_log_csv(log)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), entries = log.len(), "Exported workout log");
    Ok(())
}

/// Generate a default filename for a log export.
pub fn generate_csv_filename(now: DateTime<Local>) -> String {
    format!("ACEest_Workouts_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
