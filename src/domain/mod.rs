//! Tabular data model for fixtures
//!
//! Rows are stored column by column; every fixture hands back a [`Frame`].

pub mod frame;
pub mod scalar;
pub mod types;

pub use frame::{Column, ColumnData, Frame, RowIndex};
pub use scalar::Scalar;
pub use types::{ColumnName, IdPrefix};
