//! Validated newtypes for table structure
//!
//! Column names and string-id prefixes are checked at the boundary so the rest
//! of the crate can rely on them.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// Name of a column in a [`Frame`](crate::domain::Frame)
///
/// Surrounding whitespace is trimmed. Limited to 64 characters, which is far
/// beyond any name a fixture uses.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 64),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct ColumnName(String);

impl ColumnName {
    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// Prefix prepended to integer ids to make them string-typed
///
/// The prefixed id must stay opaque: no digit suffix may turn it into
/// something that parses as a number.
#[nutype(
    validate(not_empty, len_char_max = 64, predicate = is_opaque_prefix),
    derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsRef, Display)
)]
pub struct IdPrefix(String);

fn is_opaque_prefix(prefix: &str) -> bool {
    let probe = format!("{prefix}0");
    probe.parse::<f64>().is_err() && probe.parse::<i64>().is_err()
}
