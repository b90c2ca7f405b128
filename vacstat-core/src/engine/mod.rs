//! Aggregation engine — grouping, thresholding, and top-N ranking.

pub mod aggregate;
pub mod payload;

pub use aggregate::aggregate;
pub use payload::{CitySalary, CityShare, StatisticsPayload};
