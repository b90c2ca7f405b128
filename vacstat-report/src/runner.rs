//! Run orchestration: load the source, aggregate, stamp the result.

use std::time::Instant;

use anyhow::{Context, Result};
use vacstat_core::data::RecordStore;
use vacstat_core::engine::aggregate;

use crate::config::ReportConfig;
use crate::result::ReportResult;

/// Execute one full run.
///
/// Loading is the only I/O and completes before aggregation starts; any load
/// failure aborts here with no artifacts written.
pub fn run_report(config: &ReportConfig) -> Result<ReportResult> {
    let started = Instant::now();

    let store = RecordStore::from_path(&config.source.path)
        .with_context(|| format!("Failed to load {}", config.source.path.display()))?;
    let payload = aggregate(&store, &config.source.filter);

    Ok(ReportResult {
        run_id: payload.fingerprint(),
        source: config.source.path.display().to_string(),
        filter: config.source.filter.clone(),
        total_records: store.len(),
        rows_dropped: store.rows_dropped(),
        generated_at: chrono::Local::now().naive_local(),
        duration_secs: started.elapsed().as_secs_f64(),
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, SourceConfig};
    use std::io::Write;

    fn write_source(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("vacancies.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{content}").unwrap();
        path
    }

    fn config_for(path: std::path::PathBuf, filter: &str) -> ReportConfig {
        ReportConfig {
            source: SourceConfig {
                path,
                filter: filter.to_string(),
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn runs_end_to_end_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "name,salary_from,salary_to,salary_currency,area_name,published_at\n\
             Программист,30000,40000,RUR,Москва,2019-07-05T18:19:30+0300\n\
             Аналитик,10000,20000,RUR,Казань,2020-07-05T18:19:30+0300\n",
        );

        let result = run_report(&config_for(path, "Аналитик")).unwrap();
        assert_eq!(result.total_records, 2);
        assert_eq!(result.rows_dropped, 0);
        assert_eq!(result.payload.count_by_year[&2019], 1);
        assert_eq!(result.payload.filtered_count_by_year[&2019], 0);
        assert_eq!(result.run_id, result.payload.fingerprint());
    }

    #[test]
    fn run_id_is_stable_for_identical_sources() {
        let dir = tempfile::tempdir().unwrap();
        let content = "name,salary_from,salary_to,salary_currency,area_name,published_at\n\
                       Программист,30000,40000,RUR,Москва,2019-07-05T18:19:30+0300\n";
        let first = run_report(&config_for(write_source(&dir, content), "x")).unwrap();

        let other_dir = tempfile::tempdir().unwrap();
        let second = run_report(&config_for(write_source(&other_dir, content), "x")).unwrap();

        assert_eq!(first.run_id, second.run_id);
    }

    #[test]
    fn load_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "");
        assert!(run_report(&config_for(path, "x")).is_err());
    }
}
