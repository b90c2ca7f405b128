//! Record store — loads and validates the full record set from a delimited source.

use std::path::Path;

use crate::data::normalize::{self, NormalizeError};
use crate::data::schema::{ColumnMap, SchemaError};
use crate::domain::Record;

/// Errors from loading a source into a `RecordStore`.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Source has no header row")]
    EmptySource,

    #[error("No valid records after structural filtering")]
    NoValidRecords,

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The validated, immutable record collection.
///
/// Built once from the raw source, read-only afterward. Records keep original
/// file order so identical fixtures reproduce identical aggregates. A
/// constructed store is never empty: an empty source and a source with zero
/// structurally valid rows are distinct terminal errors.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    rows_dropped: usize,
}

impl RecordStore {
    /// Load a source file. Tolerates a UTF-8 byte-order mark.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_csv(&raw)
    }

    /// Load CSV content already in memory.
    ///
    /// Rows with a field count different from the header's, or with any empty
    /// field, are dropped silently: a data-quality filter, not a fault. A
    /// normalization failure on a retained row aborts the whole load, since a
    /// silently-skewed aggregate is worse than a failed run.
    pub fn from_csv(content: &str) -> Result<Self, LoadError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = reader.records();
        let header = match rows.next() {
            Some(header) => header?,
            None => return Err(LoadError::EmptySource),
        };
        let columns = ColumnMap::from_header(&header)?;

        let mut records = Vec::new();
        let mut rows_dropped = 0;
        for row in rows {
            let row = row?;
            if !columns.is_well_formed(&row) {
                rows_dropped += 1;
                continue;
            }
            records.push(normalize::normalize(columns.project(&row))?);
        }

        if records.is_empty() {
            return Err(LoadError::NoValidRecords);
        }

        Ok(Self {
            records,
            rows_dropped,
        })
    }

    /// All records, in original file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows dropped by the structural filter.
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,salary_from,salary_to,salary_currency,area_name,published_at";

    fn source(rows: &[&str]) -> String {
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content
    }

    #[test]
    fn loads_valid_rows_in_file_order() {
        let store = RecordStore::from_csv(&source(&[
            "Программист,30000,40000,RUR,Москва,2021-05-01T00:00:00+0300",
            "Аналитик,10000,20000,RUR,Казань,2020-05-01T00:00:00+0300",
        ]))
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].name, "Программист");
        assert_eq!(store.records()[1].name, "Аналитик");
        assert_eq!(store.rows_dropped(), 0);
    }

    #[test]
    fn empty_source_is_terminal() {
        assert!(matches!(
            RecordStore::from_csv("").unwrap_err(),
            LoadError::EmptySource
        ));
    }

    #[test]
    fn header_only_source_has_no_valid_records() {
        assert!(matches!(
            RecordStore::from_csv(HEADER).unwrap_err(),
            LoadError::NoValidRecords
        ));
    }

    #[test]
    fn missing_column_is_terminal() {
        let err = RecordStore::from_csv("name,salary_from,salary_to\nа,1,2").unwrap_err();
        assert!(matches!(err, LoadError::Schema(SchemaError::MissingColumn(_))));
    }

    #[test]
    fn drops_rows_with_wrong_field_count() {
        let store = RecordStore::from_csv(&source(&[
            "Программист,30000,40000,RUR,Москва,2021-05-01",
            "Сломанная строка,30000,40000,RUR,Москва",
        ]))
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.rows_dropped(), 1);
    }

    #[test]
    fn drops_rows_with_empty_fields() {
        // An empty salary_currency cell is filtered structurally and never
        // reaches the currency table.
        let store = RecordStore::from_csv(&source(&[
            "Программист,30000,40000,RUR,Москва,2021-05-01",
            "Аналитик,30000,40000,,Москва,2021-05-01",
        ]))
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.rows_dropped(), 1);
    }

    #[test]
    fn all_rows_invalid_is_terminal() {
        let err = RecordStore::from_csv(&source(&[
            ",30000,40000,RUR,Москва,2021-05-01",
            "Аналитик,30000,40000,RUR,Москва",
        ]))
        .unwrap_err();
        assert!(matches!(err, LoadError::NoValidRecords));
    }

    #[test]
    fn unknown_currency_aborts_the_load() {
        let err = RecordStore::from_csv(&source(&[
            "Программист,30000,40000,XXX,Москва,2021-05-01",
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Normalize(NormalizeError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn malformed_date_aborts_the_load() {
        let err = RecordStore::from_csv(&source(&[
            "Программист,30000,40000,RUR,Москва,bad",
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Normalize(NormalizeError::MalformedDate(_))
        ));
    }

    #[test]
    fn tolerates_byte_order_mark() {
        let bom_source = format!("\u{feff}{}", source(&[
            "Программист,30000,40000,RUR,Москва,2021-05-01",
        ]));
        let store = RecordStore::from_csv(&bom_source).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn quoted_fields_with_commas_survive() {
        let store = RecordStore::from_csv(&source(&[
            "\"Аналитик, junior\",10000,20000,RUR,Москва,2020-05-01",
        ]))
        .unwrap();
        assert_eq!(store.records()[0].name, "Аналитик, junior");
    }
}
