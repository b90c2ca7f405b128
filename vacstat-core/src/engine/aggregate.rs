//! Aggregation — one pass to bucket, one reduction pass per bucket set.

use std::collections::{BTreeMap, HashMap};

use crate::data::RecordStore;
use crate::engine::payload::{CitySalary, CityShare, StatisticsPayload};

/// Hard size cap for both city rankings, applied after threshold filtering.
const TOP_CITIES: usize = 10;

/// Transient per-group accumulator.
#[derive(Debug, Default, Clone, Copy)]
struct Bucket {
    sum: f64,
    count: usize,
}

impl Bucket {
    fn push(&mut self, salary: f64) {
        self.sum += salary;
        self.count += 1;
    }

    /// Arithmetic mean truncated toward zero; an empty bucket averages 0.
    fn average(&self) -> i64 {
        if self.count == 0 {
            0
        } else {
            (self.sum / self.count as f64) as i64
        }
    }
}

/// Group, reduce, threshold, and rank the store into a `StatisticsPayload`.
///
/// `name_filter` is matched by case-sensitive substring containment against
/// record names. Year outputs cover the contiguous inclusive range
/// `[year_min, year_max]` even for years with zero matching records; city
/// outputs drop cities whose posting count is strictly below
/// `total_records / 100` and cap at ten entries.
pub fn aggregate(store: &RecordStore, name_filter: &str) -> StatisticsPayload {
    let records = store.records();
    let total = records.len();
    if total == 0 {
        return StatisticsPayload::default();
    }

    // Year skeleton: every year in the observed range gets a bucket up front,
    // so gap years survive into the outputs.
    let year_min = records.iter().map(|r| r.year).min().unwrap_or(0);
    let year_max = records.iter().map(|r| r.year).max().unwrap_or(0);
    let mut years: BTreeMap<i32, Bucket> = (year_min..=year_max)
        .map(|year| (year, Bucket::default()))
        .collect();
    let mut filtered_years = years.clone();

    // City buckets keep first-seen order so ranking ties stay in grouping order.
    let mut cities: Vec<(String, Bucket)> = Vec::new();
    let mut city_index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let salary = record.salary_average_rub;

        years.entry(record.year).or_default().push(salary);
        if record.name.contains(name_filter) {
            filtered_years.entry(record.year).or_default().push(salary);
        }

        let slot = match city_index.get(&record.area_name) {
            Some(&slot) => slot,
            None => {
                cities.push((record.area_name.clone(), Bucket::default()));
                city_index.insert(record.area_name.clone(), cities.len() - 1);
                cities.len() - 1
            }
        };
        cities[slot].1.push(salary);
    }

    let (salary_by_year, count_by_year) = reduce_years(&years);
    let (filtered_salary_by_year, filtered_count_by_year) = reduce_years(&filtered_years);

    // Noise-reduction filter, not a ranking cutoff: a count equal to the
    // threshold is retained, strictly below is dropped.
    let min_count = total / 100;
    let survivors: Vec<&(String, Bucket)> = cities
        .iter()
        .filter(|(_, bucket)| bucket.count >= min_count)
        .collect();

    let mut by_salary = survivors.clone();
    by_salary.sort_by(|a, b| b.1.average().cmp(&a.1.average()));
    let top_salary_cities = by_salary
        .iter()
        .take(TOP_CITIES)
        .map(|(city, bucket)| CitySalary {
            city: city.clone(),
            average_salary: bucket.average(),
        })
        .collect();

    let mut by_count = survivors;
    by_count.sort_by(|a, b| b.1.count.cmp(&a.1.count));
    let top_share_cities = by_count
        .iter()
        .take(TOP_CITIES)
        .map(|(city, bucket)| CityShare {
            city: city.clone(),
            share: round4(bucket.count as f64 / total as f64),
        })
        .collect();

    StatisticsPayload {
        salary_by_year,
        count_by_year,
        filtered_salary_by_year,
        filtered_count_by_year,
        top_salary_cities,
        top_share_cities,
    }
}

fn reduce_years(years: &BTreeMap<i32, Bucket>) -> (BTreeMap<i32, i64>, BTreeMap<i32, usize>) {
    let mut salaries = BTreeMap::new();
    let mut counts = BTreeMap::new();
    for (year, bucket) in years {
        salaries.insert(*year, bucket.average());
        counts.insert(*year, bucket.count);
    }
    (salaries, counts)
}

fn round4(fraction: f64) -> f64 {
    (fraction * 10_000.0).round() / 10_000.0
}
