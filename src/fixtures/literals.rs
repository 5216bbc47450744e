//! Literal data behind every fixture
//!
//! This module centralizes the hard-coded arrays so each fixture variant is
//! assembled from the same numbers. Column names are plain `&str` constants
//! because `ColumnName` validation is not `const`; the suite's `column` helper
//! treats a rejected literal as a bug and panics.

/// Column names used by the fixtures
pub mod columns {
    pub const ID: &str = "id";
    pub const KIND: &str = "kind";
    pub const SORT: &str = "sort";
    pub const VAL: &str = "val";
    pub const TIME: &str = "time";
    pub const A: &str = "a";
    pub const B: &str = "b";
}

/// Two entities, two kinds, 20 rows per (id, kind) series
pub mod long_form {
    pub const ROWS: usize = 80;
    pub const ROWS_PER_SERIES: usize = 20;
    pub const ENTITY_IDS: [i64; 2] = [10, 500];
    /// Kinds in block order; each block is `ROWS_PER_SERIES` rows
    pub const KIND_BLOCKS: [&str; 4] = ["a", "b", "a", "b"];

    /// Permutation of 0..80, deliberately unsorted
    pub const SORT: [i64; ROWS] = [
        30, 53, 26, 35, 42, 25, 17, 67, 20, 68, 46, 12, 0, 74, 66, 31, 32, 2, 55, 59, //
        56, 60, 34, 69, 47, 15, 49, 8, 50, 73, 23, 62, 24, 33, 22, 70, 3, 38, 28, 75, //
        39, 36, 64, 13, 72, 52, 40, 16, 58, 29, 63, 79, 61, 78, 1, 10, 4, 6, 65, 44, //
        54, 48, 11, 14, 19, 43, 76, 7, 51, 9, 27, 21, 5, 71, 57, 77, 41, 18, 45, 37,
    ];

    pub const VAL: [i64; ROWS] = [
        11, 9, 67, 45, 30, 58, 62, 19, 56, 29, 0, 27, 36, 43, 33, 2, 24, 71, 41, 28, //
        50, 40, 39, 7, 53, 23, 16, 37, 66, 38, 6, 47, 3, 61, 44, 42, 78, 31, 21, 55, //
        15, 35, 25, 32, 69, 65, 70, 64, 51, 46, 5, 77, 26, 73, 76, 75, 72, 74, 10, 57, //
        4, 14, 68, 22, 18, 52, 54, 60, 79, 12, 49, 63, 8, 59, 1, 13, 20, 17, 48, 34,
    ];
}

/// The long-form values pivoted to one row per (id, position)
pub mod wide_form {
    pub const ROWS: usize = 40;

    /// `(id, sort, a, b)`
    pub const RECORDS: [(i64, i64, i64, i64); ROWS] = [
        (10, 0, 11, 50),
        (10, 1, 9, 40),
        (10, 2, 67, 39),
        (10, 3, 45, 7),
        (10, 4, 30, 53),
        (10, 5, 58, 23),
        (10, 6, 62, 16),
        (10, 7, 19, 37),
        (10, 8, 56, 66),
        (10, 9, 29, 38),
        (10, 10, 0, 6),
        (10, 11, 27, 47),
        (10, 12, 36, 3),
        (10, 13, 43, 61),
        (10, 14, 33, 44),
        (10, 15, 2, 42),
        (10, 16, 24, 78),
        (10, 17, 71, 31),
        (10, 18, 41, 21),
        (10, 19, 28, 55),
        (500, 0, 15, 4),
        (500, 1, 35, 14),
        (500, 2, 25, 68),
        (500, 3, 32, 22),
        (500, 4, 69, 18),
        (500, 5, 65, 52),
        (500, 6, 70, 54),
        (500, 7, 64, 60),
        (500, 8, 51, 79),
        (500, 9, 46, 12),
        (500, 10, 5, 49),
        (500, 11, 77, 63),
        (500, 12, 26, 8),
        (500, 13, 73, 59),
        (500, 14, 76, 1),
        (500, 15, 75, 13),
        (500, 16, 72, 20),
        (500, 17, 74, 17),
        (500, 18, 10, 48),
        (500, 19, 57, 34),
    ];
}

/// Daily timestamps for the time-indexed sample
pub mod time_index {
    use chrono::NaiveDate;

    pub const START: &str = "2018-01-01";
    pub const START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2018, 1, 1) {
        Some(date) => date,
        None => panic!("time index start is not a calendar date"),
    };
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// String-typed ids that look almost numeric
pub mod string_ids {
    pub const PREFIX: &str = "99999_9999_";
}

/// Two groups: one single-row series and one two-row series
pub mod one_valued {
    pub const ID: [i64; 3] = [1, 2, 2];
    pub const KIND: [&str; 3] = ["a", "a", "a"];
    pub const SORT: [i64; 3] = [1, 1, 2];
    pub const VAL: [f64; 3] = [1.0, 5.0, 6.0];
}

/// 50 three-step series whose target is the series mean
pub mod with_target {
    pub const GROUPS: usize = 50;
    pub const STEPS: usize = 3;
    pub const KIND: &str = "a";
    pub const LOW_GROUPS: usize = 30;
    pub const LOW_CYCLE: [i64; STEPS] = [1, 2, 3];
    pub const HIGH_CYCLE: [i64; STEPS] = [4, 5, 6];
    pub const LOW_TARGET: i64 = 2;
    pub const HIGH_TARGET: i64 = 5;
}
