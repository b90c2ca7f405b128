//! Statistics payload — the frozen output contract for presentation consumers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One city in the salary ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CitySalary {
    pub city: String,
    pub average_salary: i64,
}

/// One city in the posting-share ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityShare {
    pub city: String,
    pub share: f64,
}

/// The six aggregate outputs, read-only once produced.
///
/// Year-keyed maps iterate in ascending year order and cover the full
/// contiguous year range observed in the source, zero-valued where no records
/// match. City rankings are stored in descending rank order and capped at ten
/// entries. Consumers never re-sort or re-group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatisticsPayload {
    /// Year → average salary, all records.
    pub salary_by_year: BTreeMap<i32, i64>,
    /// Year → posting count, all records.
    pub count_by_year: BTreeMap<i32, usize>,
    /// Year → average salary, name-filtered records.
    pub filtered_salary_by_year: BTreeMap<i32, i64>,
    /// Year → posting count, name-filtered records.
    pub filtered_count_by_year: BTreeMap<i32, usize>,
    /// Top cities by average salary, descending.
    pub top_salary_cities: Vec<CitySalary>,
    /// Top cities by posting-share fraction, descending by count.
    pub top_share_cities: Vec<CityShare>,
}

impl StatisticsPayload {
    /// Inclusive year range covered by the year-keyed outputs.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = *self.salary_by_year.keys().next()?;
        let max = *self.salary_by_year.keys().next_back()?;
        Some((min, max))
    }

    /// Share of postings outside the ranked cities: the synthetic "other"
    /// slice a pie-chart consumer appends after the ranked slices.
    pub fn residual_share(&self) -> f64 {
        let ranked: f64 = self.top_share_cities.iter().map(|city| city.share).sum();
        (1.0 - ranked).max(0.0)
    }

    /// Deterministic identity of this payload.
    ///
    /// Serialization is canonical: map keys are ordered and the city vectors
    /// carry their rank order, so equal payloads hash equal.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).expect("StatisticsPayload must serialize");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
