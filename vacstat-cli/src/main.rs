//! VacStat CLI — aggregate job-posting statistics and export report artifacts.
//!
//! Commands:
//! - `run` — load a source, aggregate, print the summary, save artifacts
//! - `check` — structural validation report for a source file

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use vacstat_core::data::RecordStore;
use vacstat_report::config::{OutputConfig, ReportConfig, SourceConfig};
use vacstat_report::reporting::export_run_with_report;
use vacstat_report::result::ReportResult;
use vacstat_report::runner::run_report;

#[derive(Parser)]
#[command(name = "vacstat", about = "VacStat CLI - job posting statistics engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a source file and export report artifacts.
    Run {
        /// Path to the delimited source file.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Name filter, matched by substring containment.
        #[arg(long, default_value = "")]
        filter: String,

        /// Path to a TOML config file (mutually exclusive with --input).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output directory for artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Skip the markdown report.
        #[arg(long, default_value_t = false)]
        no_report: bool,
    },
    /// Load a source file and report structural validation results.
    Check {
        /// Path to the delimited source file.
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            filter,
            config,
            output_dir,
            no_report,
        } => run_cmd(input, filter, config, output_dir, no_report),
        Commands::Check { input } => check_cmd(&input),
    }
}

fn run_cmd(
    input: Option<PathBuf>,
    filter: String,
    config_path: Option<PathBuf>,
    output_dir: PathBuf,
    no_report: bool,
) -> Result<()> {
    if config_path.is_some() && input.is_some() {
        bail!("--config and --input are mutually exclusive");
    }

    let config = if let Some(path) = config_path {
        ReportConfig::from_file(&path)?
    } else {
        let Some(path) = input else {
            bail!("one of --config or --input is required");
        };
        ReportConfig {
            source: SourceConfig { path, filter },
            output: OutputConfig {
                dir: output_dir,
                markdown: !no_report,
            },
        }
    };

    let result = run_report(&config)?;
    print_summary(&result);

    let paths = export_run_with_report(&config.output.dir, &result, config.output.markdown)?;
    let run_dir = paths.manifest.parent().unwrap_or(&config.output.dir);
    println!("Artifacts saved to: {}", run_dir.display());

    Ok(())
}

fn check_cmd(input: &Path) -> Result<()> {
    let store = RecordStore::from_path(input)?;

    let year_min = store.records().iter().map(|r| r.year).min();
    let year_max = store.records().iter().map(|r| r.year).max();

    println!("Source OK: {}", input.display());
    println!("Valid records:  {}", store.len());
    println!("Dropped rows:   {}", store.rows_dropped());
    if let (Some(min), Some(max)) = (year_min, year_max) {
        println!("Years:          {min} to {max}");
    }

    Ok(())
}

fn print_summary(result: &ReportResult) {
    let payload = &result.payload;

    println!();
    println!("=== Statistics Report ===");
    println!("Source:         {}", result.source);
    println!("Filter:         {}", result.filter);
    println!(
        "Records:        {} ({} rows dropped)",
        result.total_records, result.rows_dropped
    );
    if let Some((min, max)) = payload.year_range() {
        println!("Years:          {min} to {max}");
    }

    println!();
    println!("--- Salary and postings by year ---");
    for (year, salary) in &payload.salary_by_year {
        let count = payload.count_by_year.get(year).copied().unwrap_or(0);
        let filtered_salary = payload.filtered_salary_by_year.get(year).copied().unwrap_or(0);
        let filtered_count = payload.filtered_count_by_year.get(year).copied().unwrap_or(0);
        println!(
            "{year}: avg {salary:>8}, count {count:>6}   (filtered: avg {filtered_salary:>8}, count {filtered_count:>6})"
        );
    }

    println!();
    println!("--- Top cities by salary ---");
    for (rank, city) in payload.top_salary_cities.iter().enumerate() {
        println!("{:>3}. {:<24} {:>10}", rank + 1, city.city, city.average_salary);
    }

    println!();
    println!("--- Top cities by posting share ---");
    for (rank, city) in payload.top_share_cities.iter().enumerate() {
        println!(
            "{:>3}. {:<24} {:>9.2}%",
            rank + 1,
            city.city,
            city.share * 100.0
        );
    }
    let residual = payload.residual_share();
    if residual > 0.0 {
        println!("     {:<24} {:>9.2}%", "Other", residual * 100.0);
    }
    println!();
}
