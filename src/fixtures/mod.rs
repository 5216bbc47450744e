//! Deterministic tabular fixtures
//!
//! Each free function builds one fixture from the standard suite. Every call
//! returns a freshly allocated frame owned by the caller.

pub mod literals;
pub mod suite;

pub use suite::{FixtureSuite, FixtureVariant, Target};

use crate::domain::Frame;

pub fn test_data_sample() -> Frame {
    FixtureSuite::standard().sample()
}

pub fn test_data_sample_wide() -> Frame {
    FixtureSuite::standard().wide_sample()
}

pub fn test_data_sample_with_time_index() -> Frame {
    FixtureSuite::standard().time_indexed_sample()
}

pub fn test_data_nearly_numerical_indices() -> Frame {
    FixtureSuite::standard().string_id_sample()
}

pub fn one_valued_time_series() -> Frame {
    FixtureSuite::standard().one_valued_series()
}

/// Sample of 50 series plus the mean of each series as target
pub fn test_data_sample_with_target() -> (Frame, Target) {
    FixtureSuite::standard().sample_with_target()
}
