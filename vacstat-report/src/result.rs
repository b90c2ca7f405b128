//! Report run result.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use vacstat_core::engine::StatisticsPayload;

/// Unique identifier for a report run (the payload fingerprint).
pub type RunId = String;

/// Complete result of one report run.
///
/// The payload carries the six statistics in consumer order; the surrounding
/// fields are run metadata for the manifest and the markdown report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResult {
    pub run_id: RunId,
    pub source: String,
    pub filter: String,
    pub total_records: usize,
    pub rows_dropped: usize,
    pub generated_at: NaiveDateTime,
    pub duration_secs: f64,
    pub payload: StatisticsPayload,
}
