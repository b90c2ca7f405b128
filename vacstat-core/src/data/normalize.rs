//! Record normalization — markup stripping, salary conversion, year extraction.

use crate::domain::{CurrencyTable, RawRecord, Record};

/// Errors from normalizing a single raw row.
///
/// Structural problems (wrong field count, empty cells) never reach the
/// normalizer; anything that fails here is a semantic defect in the source
/// and aborts the whole load.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Unknown currency code: {0:?}")]
    UnknownCurrency(String),

    #[error("Malformed publication date: {0:?}")]
    MalformedDate(String),

    #[error("Malformed salary bound: {0:?}")]
    MalformedSalary(String),
}

/// Strips HTML-like tags and collapses whitespace noise from a text field.
///
/// Line breaks join the surviving fragments with `"; "`, carriage returns are
/// dropped, and runs of whitespace collapse to single spaces. A bare `<>` or
/// an unterminated `<` is kept literally.
pub fn strip_markup(text: &str) -> String {
    let joined = delete_tags(text).replace('\n', "; ").replace('\r', "");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn delete_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open + 1..].find('>') {
            Some(close) if close > 0 => rest = &rest[open + 1 + close + 1..],
            _ => {
                out.push('<');
                rest = &rest[open + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Normalize one raw row into a `Record`.
///
/// Applies `strip_markup` to the name and area fields, converts the salary
/// bounds through the currency table into a single RUB average, and parses
/// the year from the leading four characters of the publication field.
pub fn normalize(raw: RawRecord<'_>) -> Result<Record, NormalizeError> {
    let salary_from = parse_salary(raw.salary_from)?;
    let salary_to = parse_salary(raw.salary_to)?;
    let rate = CurrencyTable::rate(raw.salary_currency)
        .ok_or_else(|| NormalizeError::UnknownCurrency(raw.salary_currency.to_string()))?;
    let year = parse_year(raw.published_at)?;

    Ok(Record {
        name: strip_markup(raw.name),
        salary_average_rub: (salary_from + salary_to) * rate / 2.0,
        area_name: strip_markup(raw.area_name),
        year,
    })
}

fn parse_salary(field: &str) -> Result<f64, NormalizeError> {
    field
        .trim()
        .parse()
        .map_err(|_| NormalizeError::MalformedSalary(field.to_string()))
}

fn parse_year(published_at: &str) -> Result<i32, NormalizeError> {
    published_at
        .get(..4)
        .and_then(|lead| lead.parse().ok())
        .ok_or_else(|| NormalizeError::MalformedDate(published_at.to_string()))
}
