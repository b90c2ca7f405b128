//! Source loading — schema mapping, normalization, and the record store.

pub mod normalize;
pub mod schema;
pub mod store;

pub use normalize::{normalize, strip_markup, NormalizeError};
pub use schema::{ColumnMap, SchemaError, REQUIRED_COLUMNS};
pub use store::{LoadError, RecordStore};
