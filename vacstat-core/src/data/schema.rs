//! Source schema — validated header-to-index mapping, built once per load.

use csv::StringRecord;

use crate::domain::RawRecord;

/// Column names the source header must contain.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "name",
    "salary_from",
    "salary_to",
    "salary_currency",
    "area_name",
    "published_at",
];

/// Fixed header-to-index mapping for the six required columns.
///
/// Built once from the header row; every data row is projected through the
/// resolved indices instead of re-querying column names per row. The header
/// may carry extra columns in any order.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    width: usize,
    name: usize,
    salary_from: usize,
    salary_to: usize,
    salary_currency: usize,
    area_name: usize,
    published_at: usize,
}

impl ColumnMap {
    /// Resolve the required columns against a header row.
    pub fn from_header(header: &StringRecord) -> Result<Self, SchemaError> {
        let index_of = |column: &str| {
            header
                .iter()
                .position(|field| field == column)
                .ok_or_else(|| SchemaError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            width: header.len(),
            name: index_of("name")?,
            salary_from: index_of("salary_from")?,
            salary_to: index_of("salary_to")?,
            salary_currency: index_of("salary_currency")?,
            area_name: index_of("area_name")?,
            published_at: index_of("published_at")?,
        })
    }

    /// Field count of the header row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// True if the row has the header's field count and no empty fields.
    pub fn is_well_formed(&self, row: &StringRecord) -> bool {
        row.len() == self.width && row.iter().all(|field| !field.is_empty())
    }

    /// Project a well-formed row onto the six required columns.
    pub fn project<'a>(&self, row: &'a StringRecord) -> RawRecord<'a> {
        RawRecord {
            name: &row[self.name],
            salary_from: &row[self.salary_from],
            salary_to: &row[self.salary_to],
            salary_currency: &row[self.salary_currency],
            area_name: &row[self.area_name],
            published_at: &row[self.published_at],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}
