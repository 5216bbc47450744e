//! Structural contracts of every fixture variant
//!
//! Downstream feature-extraction tests depend on these exact shapes, so any
//! drift in row counts, grouping keys, sort keys or targets fails here first.

use chrono::{Duration, NaiveDate};
use rstest::{fixture, rstest};
use series_fixtures::fixtures::{self, literals};
use series_fixtures::{FixtureSuite, FixtureVariant, Frame, RowIndex, Scalar};
use std::collections::BTreeSet;

#[fixture]
fn suite() -> FixtureSuite {
    FixtureSuite::standard()
}

fn ints<'a>(frame: &'a Frame, name: &str) -> &'a [i64] {
    frame
        .try_column(name)
        .unwrap()
        .data()
        .as_ints()
        .unwrap()
}

fn key(id: i64, kind: &str) -> Vec<Scalar> {
    vec![Scalar::Int(id), Scalar::from(kind)]
}

#[rstest]
fn sample_has_two_entities_with_two_kinds_each(suite: FixtureSuite) {
    let frame = suite.sample();

    assert_eq!(frame.len(), 80);
    assert_eq!(frame.column_names(), vec!["id", "kind", "sort", "val"]);

    let groups = frame.groups(&["id", "kind"]).unwrap();
    let keys: Vec<Vec<Scalar>> = groups.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![key(10, "a"), key(10, "b"), key(500, "a"), key(500, "b")]
    );
    assert!(groups.values().all(|rows| rows.len() == 20));
}

#[rstest]
fn sample_rows_are_unique_per_id_kind_sort(suite: FixtureSuite) {
    let frame = suite.sample();
    let groups = frame.groups(&["id", "kind", "sort"]).unwrap();
    assert_eq!(groups.len(), frame.len());
}

#[rstest]
fn sample_sort_keys_are_shuffled(suite: FixtureSuite) {
    let frame = suite.sample();
    let sorts = ints(&frame, "sort");

    let all: BTreeSet<i64> = sorts.iter().copied().collect();
    assert_eq!(all, (0..80).collect::<BTreeSet<i64>>());

    for rows in frame.groups(&["id", "kind"]).unwrap().values() {
        let in_row_order: Vec<i64> = rows.iter().map(|&row| sorts[row]).collect();
        let mut ascending = in_row_order.clone();
        ascending.sort_unstable();
        ascending.dedup();
        assert_eq!(ascending.len(), 20);
        assert_ne!(in_row_order, ascending, "sort keys must not be pre-sorted");
    }
}

#[rstest]
fn sample_rows_are_labelled_by_id(suite: FixtureSuite) {
    let frame = suite.sample();

    assert_eq!(frame.index().name(), None);
    assert!(frame.has_column("id"));
    let labels = frame.index().to_scalars();
    let ids: Vec<Scalar> = frame.try_column("id").unwrap().data().iter().collect();
    assert_eq!(labels, ids);
    assert_eq!(labels.iter().filter(|&label| *label == Scalar::Int(10)).count(), 40);
}

#[rstest]
fn wide_sample_pivots_long_form_by_position(suite: FixtureSuite) {
    let long = suite.sample();
    let wide = suite.wide_sample();

    assert_eq!(wide.len(), 40);
    assert!(wide.has_column("a") && wide.has_column("b"));
    assert!(!wide.has_column("kind") && !wide.has_column("val"));
    assert_eq!(wide.index().name(), None);
    assert_eq!(
        wide.index().to_scalars(),
        (0..40).map(Scalar::Int).collect::<Vec<_>>()
    );

    let long_groups = long.groups(&["id", "kind"]).unwrap();
    let long_vals = ints(&long, "val");
    let (ids, positions) = (ints(&wide, "id"), ints(&wide, "sort"));
    let (a, b) = (ints(&wide, "a"), ints(&wide, "b"));
    for row in 0..wide.len() {
        let position = usize::try_from(positions[row]).unwrap();
        let a_row = long_groups[&key(ids[row], "a")][position];
        let b_row = long_groups[&key(ids[row], "b")][position];
        assert_eq!((a[row], b[row]), (long_vals[a_row], long_vals[b_row]));
    }
}

#[rstest]
fn time_index_advances_one_day_per_row(suite: FixtureSuite) {
    let frame = suite.time_indexed_sample();
    let start = NaiveDate::from_ymd_opt(2018, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let RowIndex::Labels { name, values } = frame.index() else {
        panic!("time-indexed sample must carry labels");
    };
    assert!(name.is_none());
    let times = values.as_times().unwrap();
    assert_eq!(times.len(), 80);
    assert_eq!(times[0], start);
    assert!(times.windows(2).all(|pair| pair[1] - pair[0] == Duration::days(1)));

    assert_eq!(frame.column_names(), vec!["time", "id", "kind", "sort", "val"]);
    assert_eq!(frame.try_column("time").unwrap().data().as_times(), Some(times));
    assert_eq!(&frame.columns()[1..], suite.sample().columns());
}

#[rstest]
fn string_ids_never_coerce_to_entity_numbers(suite: FixtureSuite) {
    let frame = suite.string_id_sample();
    let ids = frame.try_column("id").unwrap().data().as_strs().unwrap();

    assert_eq!(ids.iter().collect::<BTreeSet<_>>().len(), 2);
    for id in ids {
        assert!(id.starts_with(literals::string_ids::PREFIX));
        assert!(id.parse::<i64>().is_err());
        assert!(id.parse::<f64>().is_err());

        let digits: String = id.chars().filter(char::is_ascii_digit).collect();
        let lenient = digits.parse::<i64>().unwrap();
        assert!(lenient != 10 && lenient != 500, "{id} coerces to an entity id");
    }

    assert_eq!(frame.index().label(0), Some(Scalar::from("99999_9999_10")));
    assert_eq!(&frame.columns()[1..], &suite.sample().columns()[1..]);
}

#[rstest]
fn one_valued_series_has_single_and_double_row_groups(suite: FixtureSuite) {
    let frame = suite.one_valued_series();

    assert_eq!(frame.len(), 3);
    assert_eq!(frame.index(), &RowIndex::range(3));
    let groups = frame.groups(&["id"]).unwrap();
    assert_eq!(groups[&vec![Scalar::Int(1)]].len(), 1);
    assert_eq!(groups[&vec![Scalar::Int(2)]].len(), 2);
    assert_eq!(
        frame.try_column("val").unwrap().data().as_floats(),
        Some(&[1.0, 5.0, 6.0][..])
    );
}

#[rstest]
fn target_is_the_mean_of_each_series(suite: FixtureSuite) {
    let (frame, target) = suite.sample_with_target();

    assert_eq!(frame.len(), 150);
    assert_eq!(target.len(), 50);
    assert!(target.values()[..30].iter().all(|&value| value == 2));
    assert!(target.values()[30..].iter().all(|&value| value == 5));

    let vals = ints(&frame, "val");
    let sorts = ints(&frame, "sort");
    for (group, rows) in frame.groups(&["id"]).unwrap() {
        let id = usize::try_from(group[0].as_i64().unwrap()).unwrap();
        let sum: i64 = rows.iter().map(|&row| vals[row]).sum();
        assert_eq!(rows.len(), 3);
        assert_eq!(sum, 3 * target.get(id).unwrap(), "group {id}");
        assert_eq!(
            rows.iter().map(|&row| sorts[row]).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    let kinds = frame.try_column("kind").unwrap().data().as_strs().unwrap();
    assert!(kinds.iter().all(|kind| kind == "a"));
}

#[rstest]
fn fixtures_are_fresh_on_every_call(
    suite: FixtureSuite,
    #[values(
        FixtureVariant::Sample,
        FixtureVariant::WideSample,
        FixtureVariant::TimeIndexedSample,
        FixtureVariant::StringIdSample,
        FixtureVariant::OneValuedSeries,
        FixtureVariant::SampleWithTarget
    )]
    variant: FixtureVariant,
) {
    let first = suite.build(variant);
    let second = suite.build(variant);
    assert_eq!(first, second);

    let changed = second.set_index("sort", true).unwrap();
    assert_ne!(first, changed);
    assert_eq!(first, suite.build(variant));
}

#[rstest]
fn fixtures_hold_only_finite_values(suite: FixtureSuite) {
    for variant in FixtureVariant::ALL {
        let frame = suite.build(variant);
        for column in frame.columns() {
            if let Some(values) = column.data().to_f64_vec() {
                assert!(
                    values.iter().all(|value| value.is_finite()),
                    "{variant}: column {} holds a non-finite value",
                    column.name()
                );
            }
        }
    }
}

#[rstest]
fn free_functions_match_standard_suite(suite: FixtureSuite) {
    assert_eq!(fixtures::test_data_sample(), suite.sample());
    assert_eq!(fixtures::test_data_sample_wide(), suite.wide_sample());
    assert_eq!(
        fixtures::test_data_sample_with_time_index(),
        suite.time_indexed_sample()
    );
    assert_eq!(
        fixtures::test_data_nearly_numerical_indices(),
        suite.string_id_sample()
    );
    assert_eq!(fixtures::one_valued_time_series(), suite.one_valued_series());
    assert_eq!(
        fixtures::test_data_sample_with_target(),
        suite.sample_with_target()
    );
}

#[rstest]
fn json_snapshot_restores_time_indexed_sample(suite: FixtureSuite) {
    let frame = suite.time_indexed_sample();
    let restored = Frame::from_json(&frame.to_json().unwrap()).unwrap();
    assert_eq!(restored, frame);
}
