//! Year sheet export (CSV) — the year-indexed consumer layout.

use std::path::Path;

use anyhow::{Context, Result};
use vacstat_core::engine::StatisticsPayload;

/// One row per year, ascending, zero-valued where the filter matched nothing.
pub fn write_years_csv(path: &Path, payload: &StatisticsPayload) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create year sheet {}", path.display()))?;

    writer.write_record([
        "year",
        "average_salary",
        "filtered_average_salary",
        "count",
        "filtered_count",
    ])?;

    for (year, salary) in &payload.salary_by_year {
        writer.write_record([
            year.to_string(),
            salary.to_string(),
            payload
                .filtered_salary_by_year
                .get(year)
                .copied()
                .unwrap_or(0)
                .to_string(),
            payload.count_by_year.get(year).copied().unwrap_or(0).to_string(),
            payload
                .filtered_count_by_year
                .get(year)
                .copied()
                .unwrap_or(0)
                .to_string(),
        ])?;
    }

    writer.flush().context("Failed to flush year sheet")?;
    Ok(())
}
