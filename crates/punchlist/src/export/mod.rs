//! Report exporters.
//!
//! Exporters are read-only collaborators: they consume job snapshots
//! (and the report-header preferences) and produce files, never
//! mutating what they were handed. Visual styling is deliberately
//! minimal: these are working documents, not marketing material.

pub mod csv;
pub mod pdf;

/// Two-decimal currency rendering used by every report.
pub(crate) fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Report label for a job's lifecycle state.
pub(crate) fn status_label(is_completed: bool) -> &'static str {
    if is_completed {
        "Completed"
    } else {
        "Active"
    }
}
