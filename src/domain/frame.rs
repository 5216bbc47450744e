//! Column-oriented table returned by every fixture
//!
//! A [`Frame`] is a list of equally long, uniquely named, typed columns plus a
//! [`RowIndex`]. It carries just enough behaviour for tests to inspect
//! fixtures: lookups, grouping, stable sorting and JSON snapshots.

use crate::domain::scalar::Scalar;
use crate::domain::types::ColumnName;
use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use derive_more::From;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Typed storage for one column
#[derive(Debug, Clone, PartialEq, From, Serialize, Deserialize)]
#[serde(tag = "dtype", content = "values", rename_all = "snake_case")]
pub enum ColumnData {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Str(Vec<String>),
    Time(Vec<NaiveDateTime>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Int(values) => values.len(),
            Self::Float(values) => values.len(),
            Self::Str(values) => values.len(),
            Self::Time(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short type name, as written in JSON snapshots
    pub fn dtype(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Time(_) => "time",
        }
    }

    pub fn get(&self, position: usize) -> Option<Scalar> {
        match self {
            Self::Int(values) => values.get(position).copied().map(Scalar::Int),
            Self::Float(values) => values.get(position).copied().map(Scalar::Float),
            Self::Str(values) => values.get(position).cloned().map(Scalar::Str),
            Self::Time(values) => values.get(position).copied().map(Scalar::Time),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Scalar> + '_ {
        (0..self.len()).filter_map(move |position| self.get(position))
    }

    pub fn as_ints(&self) -> Option<&[i64]> {
        match self {
            Self::Int(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Self::Float(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_strs(&self) -> Option<&[String]> {
        match self {
            Self::Str(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_times(&self) -> Option<&[NaiveDateTime]> {
        match self {
            Self::Time(values) => Some(values),
            _ => None,
        }
    }

    /// Numeric view of the column; integers widen to `f64`
    pub fn to_f64_vec(&self) -> Option<Vec<f64>> {
        match self {
            Self::Int(values) => Some(values.iter().map(|&value| value as f64).collect()),
            Self::Float(values) => Some(values.clone()),
            _ => None,
        }
    }

    // Callers check bounds first.
    fn take(&self, positions: &[usize]) -> Self {
        fn pick<T: Clone>(values: &[T], positions: &[usize]) -> Vec<T> {
            positions.iter().map(|&p| values[p].clone()).collect()
        }

        match self {
            Self::Int(values) => Self::Int(pick(values, positions)),
            Self::Float(values) => Self::Float(pick(values, positions)),
            Self::Str(values) => Self::Str(pick(values, positions)),
            Self::Time(values) => Self::Time(pick(values, positions)),
        }
    }
}

/// A named column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: ColumnName,
    data: ColumnData,
}

impl Column {
    pub fn new(name: ColumnName, data: impl Into<ColumnData>) -> Self {
        Self {
            name,
            data: data.into(),
        }
    }

    /// Create a column, validating the name
    pub fn try_new(name: &str, data: impl Into<ColumnData>) -> Result<Self> {
        Ok(Self::new(ColumnName::try_new(name.to_string())?, data))
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<Scalar> {
        self.data.get(position)
    }
}

/// Row labels of a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowIndex {
    /// Dense positional labels `0..len`
    Range { len: usize },
    /// Explicit labels; duplicates are allowed
    Labels {
        name: Option<ColumnName>,
        values: ColumnData,
    },
}

impl RowIndex {
    pub fn range(len: usize) -> Self {
        Self::Range { len }
    }

    /// Unnamed labels
    pub fn labels(values: impl Into<ColumnData>) -> Self {
        Self::Labels {
            name: None,
            values: values.into(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Range { len } => *len,
            Self::Labels { values, .. } => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Range { .. } => None,
            Self::Labels { name, .. } => name.as_ref().map(ColumnName::as_str),
        }
    }

    pub fn label(&self, position: usize) -> Option<Scalar> {
        match self {
            Self::Range { len } if position < *len => Some(Scalar::Int(position as i64)),
            Self::Range { .. } => None,
            Self::Labels { values, .. } => values.get(position),
        }
    }

    pub fn to_scalars(&self) -> Vec<Scalar> {
        (0..self.len())
            .filter_map(|position| self.label(position))
            .collect()
    }

    // A reordered range keeps the original positions as integer labels.
    fn take(&self, positions: &[usize]) -> Self {
        match self {
            Self::Range { .. } => Self::labels(
                positions
                    .iter()
                    .map(|&position| position as i64)
                    .collect::<Vec<_>>(),
            ),
            Self::Labels { name, values } => Self::Labels {
                name: name.clone(),
                values: values.take(positions),
            },
        }
    }
}

/// In-memory table: named typed columns plus a row index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FrameParts")]
pub struct Frame {
    columns: Vec<Column>,
    index: RowIndex,
}

#[derive(Deserialize)]
struct FrameParts {
    columns: Vec<Column>,
    index: RowIndex,
}

impl TryFrom<FrameParts> for Frame {
    type Error = Error;

    fn try_from(parts: FrameParts) -> Result<Self> {
        Self::new(parts.columns)?.with_index(parts.index)
    }
}

impl Frame {
    /// Build a frame with a range index
    ///
    /// Fails if two columns share a name or the columns differ in length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let len = columns.first().map_or(0, Column::len);
        {
            let mut seen = HashSet::new();
            for column in &columns {
                if !seen.insert(column.name()) {
                    return Err(Error::DuplicateColumn(column.name().to_string()));
                }
                if column.len() != len {
                    return Err(Error::ColumnLengthMismatch {
                        column: column.name().to_string(),
                        expected: len,
                        actual: column.len(),
                    });
                }
            }
        }

        Ok(Self {
            columns,
            index: RowIndex::range(len),
        })
    }

    /// Assemble a frame whose shape is guaranteed by the caller
    pub(crate) fn from_validated(columns: Vec<Column>, index: RowIndex) -> Self {
        debug_assert!(columns.iter().all(|column| column.len() == index.len()));
        Self { columns, index }
    }

    /// Replace the row index
    pub fn with_index(mut self, index: RowIndex) -> Result<Self> {
        let expected = self.columns.first().map_or(index.len(), Column::len);
        if index.len() != expected {
            return Err(Error::IndexLengthMismatch {
                expected,
                actual: index.len(),
            });
        }
        self.index = index;
        Ok(self)
    }

    /// Use a column's values as row labels, optionally removing the column
    pub fn set_index(mut self, name: &str, drop: bool) -> Result<Self> {
        let position = self
            .columns
            .iter()
            .position(|column| column.name() == name)
            .ok_or_else(|| Error::missing_column(name))?;
        let column = if drop {
            self.columns.remove(position)
        } else {
            self.columns[position].clone()
        };
        self.index = RowIndex::Labels {
            name: Some(column.name),
            values: column.data,
        };
        Ok(self)
    }

    pub fn clear_index_name(mut self) -> Self {
        if let RowIndex::Labels { name, .. } = &mut self.index {
            *name = None;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    pub fn try_column(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| Error::missing_column(name))
    }

    pub fn index(&self) -> &RowIndex {
        &self.index
    }

    /// Cells of one row, in column order
    pub fn row(&self, position: usize) -> Option<Vec<Scalar>> {
        if position >= self.len() {
            return None;
        }
        self.columns
            .iter()
            .map(|column| column.get(position))
            .collect()
    }

    /// Row positions per distinct key, keys ascending, positions in row order
    pub fn groups(&self, keys: &[&str]) -> Result<BTreeMap<Vec<Scalar>, Vec<usize>>> {
        let key_columns = self.key_columns(keys)?;
        let mut groups: BTreeMap<Vec<Scalar>, Vec<usize>> = BTreeMap::new();
        for position in 0..self.len() {
            groups
                .entry(key_of(&key_columns, position))
                .or_default()
                .push(position);
        }
        Ok(groups)
    }

    /// New frame holding the given rows in the given order
    pub fn take(&self, positions: &[usize]) -> Result<Self> {
        let len = self.len();
        if let Some(&position) = positions.iter().find(|&&position| position >= len) {
            return Err(Error::RowOutOfBounds { position, len });
        }

        Ok(Self {
            columns: self
                .columns
                .iter()
                .map(|column| Column {
                    name: column.name.clone(),
                    data: column.data.take(positions),
                })
                .collect(),
            index: self.index.take(positions),
        })
    }

    /// Stable ascending sort on the key columns
    pub fn sort_by(&self, keys: &[&str]) -> Result<Self> {
        let key_columns = self.key_columns(keys)?;
        let row_keys: Vec<Vec<Scalar>> = (0..self.len())
            .map(|position| key_of(&key_columns, position))
            .collect();
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&left, &right| row_keys[left].cmp(&row_keys[right]));
        self.take(&order)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn key_columns(&self, keys: &[&str]) -> Result<Vec<&Column>> {
        keys.iter().map(|key| self.try_column(key)).collect()
    }
}

fn key_of(key_columns: &[&Column], position: usize) -> Vec<Scalar> {
    key_columns
        .iter()
        .filter_map(|column| column.get(position))
        .collect()
}
