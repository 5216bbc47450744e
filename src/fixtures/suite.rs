//! Fixture factory
//!
//! [`FixtureSuite`] builds every fixture variant. Tests receive a suite by
//! composition (for example as an `rstest` fixture) instead of inheriting
//! fixture methods.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::FixtureSettings;
use crate::domain::{Column, ColumnData, ColumnName, Frame, IdPrefix, RowIndex};
use crate::error::{Error, Result};
use crate::fixtures::literals::{
    columns, long_form, one_valued, string_ids, time_index, wide_form, with_target,
};

/// Every fixture the suite can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FixtureVariant {
    #[display("sample")]
    Sample,
    #[display("wide_sample")]
    WideSample,
    #[display("time_indexed_sample")]
    TimeIndexedSample,
    #[display("string_id_sample")]
    StringIdSample,
    #[display("one_valued_series")]
    OneValuedSeries,
    #[display("sample_with_target")]
    SampleWithTarget,
}

impl FixtureVariant {
    pub const ALL: [Self; 6] = [
        Self::Sample,
        Self::WideSample,
        Self::TimeIndexedSample,
        Self::StringIdSample,
        Self::OneValuedSeries,
        Self::SampleWithTarget,
    ];

    /// Variants with one row per (id, kind, sort)
    pub fn is_long_form(self) -> bool {
        !matches!(self, Self::WideSample)
    }
}

/// Per-group target values paired with a fixture
#[derive(Debug, Clone, PartialEq, Eq, From, Into, Serialize, Deserialize)]
pub struct Target(Vec<i64>);

impl Target {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Option<i64> {
        self.0.get(position).copied()
    }
}

/// Factory for all fixture variants
///
/// The standard suite reproduces the literal fixtures exactly. A suite built
/// from settings may move the time index start and change the string-id
/// prefix; everything else stays literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSuite {
    time_index_start: NaiveDate,
    string_id_prefix: String,
}

impl Default for FixtureSuite {
    fn default() -> Self {
        Self::standard()
    }
}

impl FixtureSuite {
    pub fn standard() -> Self {
        Self {
            time_index_start: time_index::START_DATE,
            string_id_prefix: string_ids::PREFIX.to_string(),
        }
    }

    pub fn from_settings(settings: &FixtureSettings) -> Result<Self> {
        let time_index_start =
            NaiveDate::parse_from_str(&settings.time_index_start, time_index::DATE_FORMAT)
                .map_err(|e| {
                    warn!(
                        value = %settings.time_index_start,
                        "Rejected fixture time index start"
                    );
                    Error::invalid_setting("fixtures.time_index_start", e.to_string())
                })?;
        let prefix = IdPrefix::try_new(settings.string_id_prefix.clone()).inspect_err(|_| {
            warn!(
                value = %settings.string_id_prefix,
                "Rejected fixture string id prefix"
            );
        })?;

        Ok(Self::standard()
            .with_time_index_start(time_index_start)
            .with_string_id_prefix(prefix))
    }

    pub fn with_time_index_start(mut self, start: NaiveDate) -> Self {
        self.time_index_start = start;
        self
    }

    pub fn with_string_id_prefix(mut self, prefix: IdPrefix) -> Self {
        self.string_id_prefix = prefix.into_inner();
        self
    }

    pub fn time_index_start(&self) -> NaiveDate {
        self.time_index_start
    }

    pub fn string_id_prefix(&self) -> &str {
        &self.string_id_prefix
    }

    /// Build any variant; the target of [`FixtureVariant::SampleWithTarget`] is dropped
    pub fn build(&self, variant: FixtureVariant) -> Frame {
        match variant {
            FixtureVariant::Sample => self.sample(),
            FixtureVariant::WideSample => self.wide_sample(),
            FixtureVariant::TimeIndexedSample => self.time_indexed_sample(),
            FixtureVariant::StringIdSample => self.string_id_sample(),
            FixtureVariant::OneValuedSeries => self.one_valued_series(),
            FixtureVariant::SampleWithTarget => self.sample_with_target().0,
        }
    }

    /// Long-form sample: ids 10 and 500, kinds a and b, 20 rows per series
    ///
    /// Rows are labelled by `id` (unnamed, duplicated); the `id` column stays.
    pub fn sample(&self) -> Frame {
        let ids = ColumnData::Int(long_form_ids());
        let frame = Frame::from_validated(long_form_columns(ids.clone()), RowIndex::labels(ids));
        logged(FixtureVariant::Sample, frame)
    }

    /// The long-form sample pivoted to columns `a` and `b`
    pub fn wide_sample(&self) -> Frame {
        let records = wide_form::RECORDS;
        let frame = Frame::from_validated(
            vec![
                column(columns::ID, records.map(|(id, _, _, _)| id).to_vec()),
                column(columns::SORT, records.map(|(_, sort, _, _)| sort).to_vec()),
                column(columns::A, records.map(|(_, _, a, _)| a).to_vec()),
                column(columns::B, records.map(|(_, _, _, b)| b).to_vec()),
            ],
            RowIndex::labels((0..wide_form::ROWS as i64).collect::<Vec<_>>()),
        );
        logged(FixtureVariant::WideSample, frame)
    }

    /// The long-form sample with a leading `time` column used as row labels
    pub fn time_indexed_sample(&self) -> Frame {
        let times = ColumnData::Time(daily_timestamps(
            self.time_index_start.and_time(NaiveTime::MIN),
            long_form::ROWS,
        ));
        let mut time_first = vec![column(columns::TIME, times.clone())];
        time_first.extend(long_form_columns(ColumnData::Int(long_form_ids())));
        let frame = Frame::from_validated(time_first, RowIndex::labels(times));
        logged(FixtureVariant::TimeIndexedSample, frame)
    }

    /// The long-form sample with string ids such as `99999_9999_10`
    pub fn string_id_sample(&self) -> Frame {
        let ids = ColumnData::Str(
            long_form_ids()
                .into_iter()
                .map(|id| format!("{}{id}", self.string_id_prefix))
                .collect(),
        );
        let frame = Frame::from_validated(long_form_columns(ids.clone()), RowIndex::labels(ids));
        logged(FixtureVariant::StringIdSample, frame)
    }

    /// Three rows: id 1 has a single value, id 2 has two
    pub fn one_valued_series(&self) -> Frame {
        let frame = Frame::from_validated(
            vec![
                column(columns::ID, one_valued::ID.to_vec()),
                column(columns::KIND, strings(&one_valued::KIND)),
                column(columns::SORT, one_valued::SORT.to_vec()),
                column(columns::VAL, one_valued::VAL.to_vec()),
            ],
            RowIndex::range(one_valued::ID.len()),
        );
        logged(FixtureVariant::OneValuedSeries, frame)
    }

    /// 50 three-step series and their means as the target
    pub fn sample_with_target(&self) -> (Frame, Target) {
        let rows = with_target::GROUPS * with_target::STEPS;
        let ids: Vec<i64> = (0..with_target::GROUPS as i64)
            .flat_map(|id| std::iter::repeat_n(id, with_target::STEPS))
            .collect();
        let sorts: Vec<i64> = (0..with_target::GROUPS)
            .flat_map(|_| 0..with_target::STEPS as i64)
            .collect();
        let vals: Vec<i64> = (0..with_target::GROUPS)
            .flat_map(|group| {
                if group < with_target::LOW_GROUPS {
                    with_target::LOW_CYCLE
                } else {
                    with_target::HIGH_CYCLE
                }
            })
            .collect();
        let target: Vec<i64> = (0..with_target::GROUPS)
            .map(|group| {
                if group < with_target::LOW_GROUPS {
                    with_target::LOW_TARGET
                } else {
                    with_target::HIGH_TARGET
                }
            })
            .collect();

        let frame = Frame::from_validated(
            vec![
                column(columns::ID, ids),
                column(columns::KIND, vec![with_target::KIND.to_string(); rows]),
                column(columns::SORT, sorts),
                column(columns::VAL, vals),
            ],
            RowIndex::range(rows),
        );
        (
            logged(FixtureVariant::SampleWithTarget, frame),
            Target::from(target),
        )
    }
}

fn logged(variant: FixtureVariant, frame: Frame) -> Frame {
    debug!(fixture = %variant, rows = frame.len(), columns = frame.width(), "Built fixture");
    frame
}

fn column(name: &'static str, data: impl Into<ColumnData>) -> Column {
    let name =
        ColumnName::try_new(name.to_string()).expect("column name literals are non-empty");
    Column::new(name, data)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// `[10; 40] ++ [500; 40]`
fn long_form_ids() -> Vec<i64> {
    let per_entity = long_form::ROWS / long_form::ENTITY_IDS.len();
    long_form::ENTITY_IDS
        .iter()
        .flat_map(|&id| std::iter::repeat_n(id, per_entity))
        .collect()
}

fn long_form_kinds() -> Vec<String> {
    long_form::KIND_BLOCKS
        .iter()
        .flat_map(|&kind| std::iter::repeat_n(kind.to_string(), long_form::ROWS_PER_SERIES))
        .collect()
}

fn long_form_columns(ids: ColumnData) -> Vec<Column> {
    vec![
        column(columns::ID, ids),
        column(columns::KIND, long_form_kinds()),
        column(columns::SORT, long_form::SORT.to_vec()),
        column(columns::VAL, long_form::VAL.to_vec()),
    ]
}

fn daily_timestamps(start: NaiveDateTime, count: usize) -> Vec<NaiveDateTime> {
    (0..count as i64)
        .map(|day| start + Duration::days(day))
        .collect()
}
