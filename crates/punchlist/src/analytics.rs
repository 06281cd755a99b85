//! Fire-and-forget analytics seam.
//!
//! The store reports lifecycle events through an injected
//! [`AnalyticsSink`] rather than a global singleton, so the shell wires
//! in its telemetry while tests substitute a collecting double and
//! headless callers use [`NoopAnalytics`]. Sinks must never block or
//! fail the mutation that emitted the event; the provided
//! implementations are infallible by construction.

use serde::Serialize;

use crate::model::ContractorType;

/// A job lifecycle event.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JobEvent {
    Created {
        job_id: String,
        contractor_type: ContractorType,
        estimated_cost: f64,
    },
    Updated {
        job_id: String,
    },
    Completed {
        job_id: String,
        /// Whole days from start to completion date; 0 when the
        /// completion date was never set.
        duration_days: i64,
        final_cost: f64,
    },
    Deleted {
        job_id: String,
    },
}

/// Notification sink for job lifecycle events.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: &JobEvent);
}

/// Discards every event.
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn record(&self, _event: &JobEvent) {}
}

/// Writes each event as a JSON log line.
pub struct LogAnalytics;

impl AnalyticsSink for LogAnalytics {
    fn record(&self, event: &JobEvent) {
        match serde_json::to_string(event) {
            Ok(json) => log::info!("analytics: {}", json),
            Err(e) => log::warn!("analytics: failed to encode event: {}", e),
        }
    }
}
