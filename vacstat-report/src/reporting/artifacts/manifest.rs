//! Run manifest export (JSON).

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::result::ReportResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: String,
    pub generated_at: NaiveDateTime,
    pub duration_secs: f64,
    pub source: String,
    pub filter: String,
    pub total_records: usize,
    pub rows_dropped: usize,
    pub year_range: Option<(i32, i32)>,
}

pub fn write_manifest(path: &Path, result: &ReportResult) -> Result<()> {
    let manifest = RunManifest {
        run_id: result.run_id.clone(),
        generated_at: result.generated_at,
        duration_secs: result.duration_secs,
        source: result.source.clone(),
        filter: result.filter.clone(),
        total_records: result.total_records,
        rows_dropped: result.rows_dropped,
        year_range: result.payload.year_range(),
    };

    let json = serde_json::to_string_pretty(&manifest).context("Failed to serialize run manifest")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write manifest to {}", path.display()))?;
    Ok(())
}
