//! End-to-end exploration through the public API.

use std::sync::Arc;

use paramforge::prelude::*;
use paramforge::{ErrorInfo, ParamForgeError};
use paramforge_test::{counter, strs, RecordingGenerator};

fn s(v: &str) -> ParamValue {
    ParamValue::from(v)
}

#[test]
fn scenario_all_permutations_from_config() {
    let config = ExplorerConfig::from_yaml_str("strategy: all_permutations").unwrap();
    let provider =
        ProviderBuilder::build(&config, vec![strs(&["a", "b"]), strs(&["x", "y", "z"])]).unwrap();

    let tuples: Vec<_> = provider.stream().collect();
    assert_eq!(
        tuples,
        vec![
            vec![s("a"), s("x")],
            vec![s("a"), s("y")],
            vec![s("a"), s("z")],
            vec![s("b"), s("x")],
            vec![s("b"), s("y")],
            vec![s("b"), s("z")],
        ]
    );
}

#[test]
fn driver_loop_routes_every_outcome() {
    let divisor = Arc::new(RecordingGenerator::new([
        ParamValue::Int(0),
        ParamValue::Int(1),
        ParamValue::Int(-1),
    ]));
    let dividend = interesting::generator(ParamKind::Int).unwrap().shared();
    let provider = ScopedProvider::new(Suggested::new(vec![dividend, divisor.clone()]).unwrap());

    let target = FunctionRef::new("checked_div");
    let mut failures = 0;
    for tuple in provider.stream() {
        assert_eq!(tuple.len(), 2);
        let (Some(a), Some(b)) = (tuple[0].as_i64(), tuple[1].as_i64()) else {
            panic!("non-integer tuple {tuple:?}");
        };
        let record = match (a as i32).checked_div(b as i32) {
            Some(q) => ExecutionRecord::succeeded(target.clone(), tuple, Some(q.into())),
            None => {
                failures += 1;
                ExecutionRecord::failed(
                    target.clone(),
                    tuple,
                    ErrorInfo::new("ArithmeticError", "division overflow or by zero"),
                )
            }
        };
        provider.route_result(&record);
    }

    let calls = divisor.calls();
    let total = interesting::ints().len() * 3;
    assert_eq!(calls.len(), total);
    assert!(calls.iter().all(|(index, _)| *index == 1));
    // every dividend against zero, plus i32::MIN / -1
    assert_eq!(failures, interesting::ints().len() + 1);
    provider.close().unwrap();
}

#[test]
fn hybrid_with_infinite_parameter_is_unbounded() {
    let provider = ProviderBuilder::build(
        &ExplorerConfig::default().with_random_seed(99),
        vec![counter(), strs(&["a", "b"])],
    )
    .unwrap();
    assert_eq!(provider.stream().take(1_000).count(), 1_000);
}

#[test]
fn suggested_generators_by_type() {
    let generators: Vec<SharedGenerator> = [ParamKind::Bool, ParamKind::Short]
        .into_iter()
        .map(|kind| suggested(ParamType::of(kind).nullable()).unwrap())
        .collect();
    let provider = AllPermutations::new(generators).unwrap();

    let first = provider.stream().next().unwrap();
    assert_eq!(first, vec![ParamValue::Null, ParamValue::Null]);
    assert_eq!(
        provider.stream().count(),
        3 * (interesting::shorts().len() + 1)
    );

    let err = suggested(ParamType::of(ParamKind::Char)).unwrap_err();
    assert!(matches!(err, ParamForgeError::Unsupported { .. }));
}
