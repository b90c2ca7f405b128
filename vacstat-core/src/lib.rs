//! VacStat Core — aggregation engine for job-posting statistics.
//!
//! This crate contains the heart of the pipeline:
//! - Domain types (normalized records, the currency conversion table)
//! - Record normalization (tag stripping, salary conversion, year extraction)
//! - Source loading with structural validation and a fixed column schema
//! - Year/city grouping with thresholding and top-N ranking
//! - The frozen statistics payload handed to presentation consumers
//!
//! The engine is single-threaded and purely functional over its input: the
//! only I/O is source loading, which completes before aggregation starts.

pub mod data;
pub mod domain;
pub mod engine;
