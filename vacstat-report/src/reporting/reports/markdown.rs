//! Markdown report generator.
//!
//! Re-shapes the payload into row-oriented tables, the same shape a document
//! template consumer expects.

use crate::result::ReportResult;

pub struct MarkdownReportGenerator;

impl MarkdownReportGenerator {
    pub fn generate(&self, result: &ReportResult) -> String {
        let mut report = format!(
            "# VacStat Run Report\n\n\
Run ID: `{}`\n\n\
## Summary\n\
- Source: `{}`\n\
- Filter: `{}`\n\
- Records: {}\n\
- Dropped rows: {}\n",
            result.run_id, result.source, result.filter, result.total_records, result.rows_dropped,
        );
        if let Some((min, max)) = result.payload.year_range() {
            report.push_str(&format!("- Years: {min} to {max}\n"));
        }

        report.push_str("\n## Statistics by year\n\n");
        report.push_str(&format!(
            "| Year | Average salary | Average salary - {filter} | Postings | Postings - {filter} |\n",
            filter = result.filter
        ));
        report.push_str("|------|----------------|---------------------------|----------|--------------------|\n");
        for (year, salary) in &result.payload.salary_by_year {
            report.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                year,
                salary,
                result.payload.filtered_salary_by_year.get(year).copied().unwrap_or(0),
                result.payload.count_by_year.get(year).copied().unwrap_or(0),
                result.payload.filtered_count_by_year.get(year).copied().unwrap_or(0),
            ));
        }

        if !result.payload.top_salary_cities.is_empty() {
            report.push_str("\n## Salary by city\n\n");
            report.push_str("| City | Average salary |\n");
            report.push_str("|------|----------------|\n");
            for city in &result.payload.top_salary_cities {
                report.push_str(&format!("| {} | {} |\n", city.city, city.average_salary));
            }
        }

        if !result.payload.top_share_cities.is_empty() {
            report.push_str("\n## Posting share by city\n\n");
            report.push_str("| City | Share |\n");
            report.push_str("|------|-------|\n");
            for city in &result.payload.top_share_cities {
                report.push_str(&format!("| {} | {:.2}% |\n", city.city, city.share * 100.0));
            }
        }

        report
    }
}
