//! Tests for the partitioning combinator.

use std::cell::RefCell;
use std::sync::Arc;

use super::*;
use crate::provider::{AllPermutations, EvenAllParamChange, EvenSingleParamChange};
use paramforge_core::ParamForgeError;
use paramforge_test::{counter, ints, record, strs, ClosingProbe, RecordingGenerator};

fn s(v: &str) -> ParamValue {
    ParamValue::from(v)
}

fn permutations(gens: Vec<SharedGenerator>) -> Result<Box<dyn ParamProvider>> {
    Ok(Box::new(AllPermutations::new(gens)?))
}

fn even_single(gens: Vec<SharedGenerator>) -> Result<Box<dyn ParamProvider>> {
    Ok(Box::new(EvenSingleParamChange::new(gens)))
}

#[test]
fn one_sided_partition_matches_the_bare_provider() {
    let gens = || vec![strs(&["a", "b"]), strs(&["x", "y", "z"])];

    let partitioned = Partitioned::new(gens(), |_, _| true, even_single, permutations).unwrap();
    assert!(partitioned.split().is_none());
    let bare = EvenSingleParamChange::new(gens());
    assert_eq!(
        partitioned.stream().collect::<Vec<_>>(),
        bare.stream().collect::<Vec<_>>()
    );

    let partitioned = Partitioned::new(gens(), |_, _| false, even_single, permutations).unwrap();
    let bare = AllPermutations::new(gens()).unwrap();
    assert_eq!(
        partitioned.stream().collect::<Vec<_>>(),
        bare.stream().collect::<Vec<_>>()
    );
}

#[test]
fn values_are_scattered_back_to_their_positions() {
    let provider = Partitioned::new(
        vec![strs(&["a", "b"]), ints(&[1, 2]), strs(&["p", "q"])],
        |index, _| index != 1,
        permutations,
        even_single,
    )
    .unwrap()
    .with_stop_when_both_completed(false);

    assert_eq!(provider.split(), Some((&[0, 2][..], &[1][..])));
    let tuples: Vec<_> = provider.stream().take(8).collect();
    for tuple in &tuples {
        assert!(matches!(tuple[0], ParamValue::Str(ref v) if v == "a" || v == "b"));
        assert!(matches!(tuple[1], ParamValue::Int(_)));
        assert!(matches!(tuple[2], ParamValue::Str(ref v) if v == "p" || v == "q"));
    }
    assert_eq!(tuples[0], vec![s("a"), ParamValue::Int(1), s("p")]);
    assert_eq!(tuples[1], vec![s("a"), ParamValue::Int(2), s("q")]);
}

#[test]
fn stops_once_both_sides_completed() {
    let provider = Partitioned::new(
        vec![strs(&["a", "b"]), strs(&["x", "y", "z"])],
        |index, _| index == 0,
        permutations,
        even_single,
    )
    .unwrap();

    assert!(provider.stops_when_both_completed());
    assert_eq!(
        provider.stream().collect::<Vec<_>>(),
        vec![
            vec![s("a"), s("x")],
            vec![s("b"), s("y")],
            vec![s("a"), s("z")],
        ]
    );
}

#[test]
fn runs_forever_without_the_stop_flag() {
    let provider = Partitioned::new(
        vec![strs(&["a", "b"]), strs(&["x", "y", "z"])],
        |index, _| index == 0,
        permutations,
        even_single,
    )
    .unwrap()
    .with_stop_when_both_completed(false);

    let tuples: Vec<_> = provider.stream().take(20).collect();
    assert_eq!(tuples.len(), 20);
    // sides restart independently: left period 2, right period 3
    assert_eq!(tuples[6], tuples[0]);
}

#[test]
fn an_infinite_side_never_completes() {
    let provider = Partitioned::new(
        vec![counter(), strs(&["a", "b"])],
        |_, generator| generator.is_infinite(),
        |gens| Ok(Box::new(EvenAllParamChange::new(gens))),
        permutations,
    )
    .unwrap();
    assert_eq!(provider.stream().take(100).count(), 100);
}

#[test]
fn predicate_sees_original_indices() {
    let seen = RefCell::new(Vec::new());
    Partitioned::new(
        vec![ints(&[1]), ints(&[2]), ints(&[3])],
        |index, _| {
            seen.borrow_mut().push(index);
            index % 2 == 0
        },
        permutations,
        permutations,
    )
    .unwrap();
    assert_eq!(seen.into_inner(), vec![0, 1, 2]);
}

#[test]
fn factory_errors_propagate() {
    let err = Partitioned::new(
        vec![ints(&[1]), counter()],
        |_, generator| generator.is_infinite(),
        permutations,
        even_single,
    )
    .unwrap_err();
    assert!(matches!(err, ParamForgeError::InfiniteGenerator { index: 0 }));
}

#[test]
fn an_empty_side_ends_the_stream() {
    let provider = Partitioned::new(
        vec![strs(&[]), strs(&["x"])],
        |index, _| index == 0,
        permutations,
        even_single,
    )
    .unwrap()
    .with_stop_when_both_completed(false);
    assert_eq!(provider.stream().count(), 0);
}

#[test]
fn feedback_and_close_reach_each_generator_once() {
    let left = Arc::new(RecordingGenerator::new([s("a")]));
    let right = Arc::new(ClosingProbe::new([s("x")]));
    let provider = Partitioned::new(
        vec![left.clone(), right.clone()],
        |index, _| index == 0,
        permutations,
        even_single,
    )
    .unwrap();

    provider.route_result(&record(vec![s("a"), s("x")]));
    assert_eq!(left.calls(), vec![(0, s("a"))]);

    provider.close().unwrap();
    assert_eq!(right.close_count(), 1);
}
