//! Record — one job posting, raw and normalized forms.

use serde::{Deserialize, Serialize};

/// The six raw textual fields of one source row, as read.
///
/// Borrowed view over a CSV row; consumed immediately by the normalizer and
/// never stored.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    pub name: &'a str,
    pub salary_from: &'a str,
    pub salary_to: &'a str,
    pub salary_currency: &'a str,
    pub area_name: &'a str,
    pub published_at: &'a str,
}

/// One normalized job posting.
///
/// `salary_average_rub` is computed exactly once at construction:
/// `(salary_from + salary_to) * rate[currency] / 2`. The record is immutable
/// afterward and owned by the store's collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub name: String,
    pub salary_average_rub: f64,
    pub area_name: String,
    pub year: i32,
}
