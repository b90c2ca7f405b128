//! Serializable run configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a single report run.
///
/// ```toml
/// [source]
/// path = "vacancies_by_year.csv"
/// filter = "Аналитик"
///
/// [output]
/// dir = "results"
/// markdown = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the records come from and which names to single out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Path to the delimited source file.
    pub path: PathBuf,

    /// Name filter, matched by case-sensitive substring containment.
    #[serde(default)]
    pub filter: String,
}

/// Where and how artifacts are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Artifact output directory.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Also write `report.md` next to the artifacts.
    #[serde(default = "default_markdown")]
    pub markdown: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            markdown: default_markdown(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_markdown() -> bool {
    true
}

impl ReportConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse report config")
    }
}
