//! Reporting and artifact export pipeline.

pub mod artifacts;
pub mod reports;

use std::path::Path;

use anyhow::Result;

use crate::result::ReportResult;

pub use artifacts::{ArtifactManager, ArtifactPaths, RunManifest};
pub use reports::MarkdownReportGenerator;

/// Export the full artifact set, optionally with `report.md` alongside.
pub fn export_run_with_report(
    output_dir: impl AsRef<Path>,
    result: &ReportResult,
    include_report: bool,
) -> Result<ArtifactPaths> {
    let manager = ArtifactManager::new(output_dir)?;
    let mut paths = manager.save_run(result)?;

    if include_report {
        let report_path = paths
            .manifest
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join("report.md");
        let report = MarkdownReportGenerator.generate(result);
        std::fs::write(&report_path, report)?;
        paths.report_markdown = Some(report_path);
    }

    Ok(paths)
}
