//! JSON export of the log summary.

use crate::metrics::aggregator::get_summary;
use crate::reports::ExportError;
use crate::workouts::log::WorkoutLog;

/// Serialize the summary of `log` as pretty-printed JSON.
///
/// An empty log still produces a summary with zero totals.
pub fn export_summary_json(log: &WorkoutLog) -> Result<String, ExportError> {
    let summary = get_summary(log);
    serde_json::to_string_pretty(&summary).map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Export the summary to a JSON file.
pub fn export_summary_json_to_file(
    log: &WorkoutLog,
    path: &std::path::Path,
) -> Result<(), ExportError> {
    let content = export_summary_json(log)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "Exported summary");
    Ok(())
}
