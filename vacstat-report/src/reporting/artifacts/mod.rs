//! Artifact manager for persisting run outputs.

mod cities;
mod manifest;
mod years;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::result::ReportResult;

pub use manifest::RunManifest;

/// Artifact paths returned after export.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub manifest: PathBuf,
    pub years_csv: PathBuf,
    pub cities_csv: PathBuf,
    pub payload_json: PathBuf,
    pub report_markdown: Option<PathBuf>,
}

/// Manages writing all artifacts for a run.
#[derive(Debug, Clone)]
pub struct ArtifactManager {
    output_dir: PathBuf,
}

impl ArtifactManager {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)
            .context("Failed to create artifact output directory")?;
        Ok(Self { output_dir })
    }

    /// Save the complete artifact set under `<output_dir>/<run_id>/`.
    pub fn save_run(&self, result: &ReportResult) -> Result<ArtifactPaths> {
        let run_dir = self.output_dir.join(&result.run_id);
        std::fs::create_dir_all(&run_dir).context("Failed to create run artifact directory")?;

        let manifest_path = run_dir.join("manifest.json");
        manifest::write_manifest(&manifest_path, result)?;

        let years_csv = run_dir.join("years.csv");
        years::write_years_csv(&years_csv, &result.payload)?;

        let cities_csv = run_dir.join("cities.csv");
        cities::write_cities_csv(&cities_csv, &result.payload)?;

        let payload_json = run_dir.join("payload.json");
        let json = serde_json::to_string_pretty(&result.payload)
            .context("Failed to serialize payload")?;
        std::fs::write(&payload_json, json)
            .with_context(|| format!("Failed to write payload JSON {}", payload_json.display()))?;

        Ok(ArtifactPaths {
            manifest: manifest_path,
            years_csv,
            cities_csv,
            payload_json,
            report_markdown: None,
        })
    }
}
