//! City sheet export (CSV) — paired salary and share rankings.

use std::path::Path;

use anyhow::{Context, Result};
use vacstat_core::engine::StatisticsPayload;

/// Lays the two rankings side by side, one rank per row, with percentage
/// formatting on the share column.
pub fn write_cities_csv(path: &Path, payload: &StatisticsPayload) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create city sheet {}", path.display()))?;

    writer.write_record(["city", "average_salary", "", "city", "share"])?;

    let rows = payload
        .top_salary_cities
        .len()
        .max(payload.top_share_cities.len());
    for rank in 0..rows {
        let (salary_city, salary) = payload
            .top_salary_cities
            .get(rank)
            .map(|c| (c.city.as_str(), c.average_salary.to_string()))
            .unwrap_or(("", String::new()));
        let (share_city, share) = payload
            .top_share_cities
            .get(rank)
            .map(|c| (c.city.as_str(), format_percent(c.share)))
            .unwrap_or(("", String::new()));

        writer.write_record([salary_city, salary.as_str(), "", share_city, share.as_str()])?;
    }

    writer.flush().context("Failed to flush city sheet")?;
    Ok(())
}

fn format_percent(share: f64) -> String {
    format!("{:.2}%", share * 100.0)
}
