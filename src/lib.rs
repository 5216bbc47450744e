//! Series Fixtures - deterministic tabular datasets for time-series tests
//!
//! Builds small, hard-coded long-form and wide-form measurement tables
//! (several entities, several kinds, unsorted sort keys, optional time index)
//! for exercising feature-extraction code, plus a scoped guard that silences
//! warnings while a fixture is used.

pub mod config;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod telemetry;
pub mod warnings;

pub use domain::{Column, ColumnData, Frame, RowIndex, Scalar};
pub use error::{Error, Result};
pub use fixtures::{FixtureSuite, FixtureVariant, Target};
pub use warnings::{warning_free, with_warnings_suppressed, WarningFree};
