//! Integration tests: full run → artifact set on disk.

use std::io::Write;
use std::path::PathBuf;

use vacstat_report::config::{OutputConfig, ReportConfig, SourceConfig};
use vacstat_report::reporting::{export_run_with_report, ArtifactManager};
use vacstat_report::runner::run_report;

const SOURCE: &str = "name,salary_from,salary_to,salary_currency,area_name,published_at\n\
Программист,30000,40000,RUR,Москва,2019-07-05T18:19:30+0300\n\
Программист 1С,10000,20000,RUR,Казань,2019-08-05T18:19:30+0300\n\
Аналитик,100,200,USD,Москва,2021-07-05T18:19:30+0300\n";

fn write_source(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("vacancies.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{SOURCE}").unwrap();
    path
}

fn make_config(dir: &tempfile::TempDir) -> ReportConfig {
    ReportConfig {
        source: SourceConfig {
            path: write_source(dir),
            filter: "Программист".to_string(),
        },
        output: OutputConfig {
            dir: dir.path().join("results"),
            markdown: true,
        },
    }
}

#[test]
fn artifact_manager_exports_all_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = make_config(&dir);
    let result = run_report(&config).unwrap();

    let manager = ArtifactManager::new(&config.output.dir).unwrap();
    let paths = manager.save_run(&result).unwrap();

    assert!(paths.manifest.exists());
    assert!(paths.years_csv.exists());
    assert!(paths.cities_csv.exists());
    assert!(paths.payload_json.exists());
    assert!(paths.report_markdown.is_none());
}

#[test]
fn export_with_report_writes_markdown() {
    let dir = tempfile::tempdir().unwrap();
    let config = make_config(&dir);
    let result = run_report(&config).unwrap();

    let paths = export_run_with_report(&config.output.dir, &result, true).unwrap();
    let report = paths.report_markdown.unwrap();
    assert!(report.exists());

    let content = std::fs::read_to_string(report).unwrap();
    assert!(content.contains("# VacStat Run Report"));
    assert!(content.contains("Программист"));
}

#[test]
fn years_csv_has_one_row_per_year_in_range() {
    let dir = tempfile::tempdir().unwrap();
    let config = make_config(&dir);
    let result = run_report(&config).unwrap();
    let paths = export_run_with_report(&config.output.dir, &result, false).unwrap();

    let content = std::fs::read_to_string(paths.years_csv).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "year,average_salary,filtered_average_salary,count,filtered_count"
    );
    // 2019..=2021 inclusive, gap year 2020 zero-valued.
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "2019,25000,25000,2,2");
    assert_eq!(lines[2], "2020,0,0,0,0");
    assert_eq!(lines[3], "2021,9099,0,1,0");
}

#[test]
fn cities_csv_pairs_both_rankings() {
    let dir = tempfile::tempdir().unwrap();
    let config = make_config(&dir);
    let result = run_report(&config).unwrap();
    let paths = export_run_with_report(&config.output.dir, &result, false).unwrap();

    let content = std::fs::read_to_string(paths.cities_csv).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "city,average_salary,,city,share");
    assert_eq!(lines[1], "Москва,22049,,Москва,66.67%");
    assert_eq!(lines[2], "Казань,15000,,Казань,33.33%");
}

#[test]
fn payload_json_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let config = make_config(&dir);
    let result = run_report(&config).unwrap();
    let paths = export_run_with_report(&config.output.dir, &result, false).unwrap();

    let content = std::fs::read_to_string(paths.payload_json).unwrap();
    let payload: vacstat_core::engine::StatisticsPayload =
        serde_json::from_str(&content).unwrap();
    assert_eq!(payload, result.payload);
    assert_eq!(payload.fingerprint(), result.run_id);
}

#[test]
fn manifest_carries_run_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let config = make_config(&dir);
    let result = run_report(&config).unwrap();
    let paths = export_run_with_report(&config.output.dir, &result, false).unwrap();

    let content = std::fs::read_to_string(paths.manifest).unwrap();
    let manifest: vacstat_report::RunManifest = serde_json::from_str(&content).unwrap();
    assert_eq!(manifest.run_id, result.run_id);
    assert_eq!(manifest.filter, "Программист");
    assert_eq!(manifest.total_records, 3);
    assert_eq!(manifest.year_range, Some((2019, 2021)));
}
