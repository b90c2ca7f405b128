//! Static currency conversion table.

/// Conversion factors to RUB, fixed at build time.
const RATES_TO_RUB: &[(&str, f64)] = &[
    ("AZN", 35.68),
    ("BYR", 23.91),
    ("EUR", 59.90),
    ("GEL", 21.74),
    ("KGS", 0.76),
    ("KZT", 0.13),
    ("RUR", 1.0),
    ("UAH", 1.64),
    ("USD", 60.66),
    ("UZS", 0.0055),
];

/// Process-wide constant mapping from currency code to RUB conversion factor.
///
/// Every record's currency must exist here; the normalizer turns an absent
/// code into `NormalizeError::UnknownCurrency`.
pub struct CurrencyTable;

impl CurrencyTable {
    /// Conversion factor for `code`, or `None` if the code is not in the table.
    pub fn rate(code: &str) -> Option<f64> {
        RATES_TO_RUB
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, rate)| *rate)
    }

    /// All known currency codes, in table order.
    pub fn codes() -> impl Iterator<Item = &'static str> {
        RATES_TO_RUB.iter().map(|(code, _)| *code)
    }
}
