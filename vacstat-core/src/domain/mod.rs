//! Domain types — records and the currency conversion table.

pub mod currency;
pub mod record;

pub use currency::CurrencyTable;
pub use record::{RawRecord, Record};
