//! VacStat Report — run orchestration and artifact export.
//!
//! This crate builds on `vacstat-core` to provide:
//! - TOML run configuration
//! - A single-run orchestrator (load → aggregate → stamp)
//! - Artifact export: manifest JSON, year/city CSV sheets, payload JSON
//! - Row-oriented markdown reports

pub mod config;
pub mod reporting;
pub mod result;
pub mod runner;

pub use config::{OutputConfig, ReportConfig, SourceConfig};
pub use reporting::{export_run_with_report, ArtifactManager, ArtifactPaths, RunManifest};
pub use result::{ReportResult, RunId};
pub use runner::run_report;
