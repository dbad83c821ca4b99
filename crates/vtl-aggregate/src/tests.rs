// SPDX-License-Identifier: Apache-2.0

use crate::{reducer, Accumulator, ReducerKind};
use vtl_type::{Value, ValueType};

fn reduce(kind: ReducerKind, input_type: ValueType, values: &[Value]) -> Value {
    let reducer = reducer::build(kind, Some(input_type)).unwrap();
    let mut acc = reducer.new_accumulator();
    for v in values {
        acc.accumulate(v);
    }
    acc.finish()
}

fn split_reduce(kind: ReducerKind, input_type: ValueType, values: &[Value], split: usize) -> Value {
    let reducer = reducer::build(kind, Some(input_type)).unwrap();
    let mut left = reducer.new_accumulator();
    for v in &values[..split] {
        left.accumulate(v);
    }
    let mut right = reducer.new_accumulator();
    for v in &values[split..] {
        right.accumulate(v);
    }
    left.combine(right.as_ref());
    left.finish()
}

#[test]
fn scenario_4_avg_skips_nulls_and_empty_is_null() {
    let values = vec![Value::Integer(1), Value::Integer(2), Value::Integer(3), Value::Null];
    assert_eq!(reduce(ReducerKind::Avg, ValueType::Integer, &values), Value::Number(2.0));
    assert_eq!(reduce(ReducerKind::Avg, ValueType::Integer, &[]), Value::Null);
}

#[test]
fn scenario_5_median_even_odd_and_any_null() {
    let evens =
        vec![Value::Integer(1), Value::Integer(2), Value::Integer(3), Value::Integer(4)];
    assert_eq!(reduce(ReducerKind::Median, ValueType::Integer, &evens), Value::Number(2.5));

    let with_null = vec![Value::Integer(1), Value::Integer(2), Value::Null];
    assert_eq!(reduce(ReducerKind::Median, ValueType::Integer, &with_null), Value::Null);
}

#[test]
fn scenario_6_stddev_pop_and_singleton_samp() {
    let values = [2, 4, 4, 4, 5, 5, 7, 9].map(Value::Integer);
    assert_eq!(
        reduce(ReducerKind::StddevPop, ValueType::Integer, &values),
        Value::Number(2.0)
    );
    assert_eq!(
        reduce(ReducerKind::StddevSamp, ValueType::Integer, &[Value::Integer(5)]),
        Value::Number(0.0)
    );
}

#[test]
fn count_includes_nulls() {
    let values = vec![Value::Integer(1), Value::Null, Value::Integer(2)];
    assert_eq!(reduce(ReducerKind::Count, ValueType::Integer, &values), Value::Integer(3));
}

#[test]
fn sum_skips_nulls_per_type() {
    let ints = vec![Value::Integer(1), Value::Null, Value::Integer(2)];
    assert_eq!(reduce(ReducerKind::Sum, ValueType::Integer, &ints), Value::Integer(3));

    let nums = vec![Value::Number(1.5), Value::Number(2.5)];
    assert_eq!(reduce(ReducerKind::Sum, ValueType::Number, &nums), Value::Number(4.0));
}

#[test]
fn min_treats_null_as_smaller_than_everything() {
    let values = vec![Value::Integer(3), Value::Null, Value::Integer(1)];
    assert_eq!(reduce(ReducerKind::Min, ValueType::Integer, &values), Value::Null);

    let no_nulls = vec![Value::Integer(3), Value::Integer(1), Value::Integer(2)];
    assert_eq!(reduce(ReducerKind::Min, ValueType::Integer, &no_nulls), Value::Integer(1));
}

#[test]
fn max_ignores_nulls_unless_all_null() {
    let values = vec![Value::Integer(3), Value::Null, Value::Integer(7)];
    assert_eq!(reduce(ReducerKind::Max, ValueType::Integer, &values), Value::Integer(7));

    let all_null = vec![Value::Null, Value::Null];
    assert_eq!(reduce(ReducerKind::Max, ValueType::Integer, &all_null), Value::Null);
}

#[test]
fn empty_group_reducers_yield_null_or_zero_per_spec() {
    assert_eq!(reduce(ReducerKind::Min, ValueType::Integer, &[]), Value::Null);
    assert_eq!(reduce(ReducerKind::Max, ValueType::Integer, &[]), Value::Null);
    assert_eq!(reduce(ReducerKind::Median, ValueType::Integer, &[]), Value::Null);
    assert_eq!(reduce(ReducerKind::StddevPop, ValueType::Integer, &[]), Value::Number(0.0));
    assert_eq!(reduce(ReducerKind::VarSamp, ValueType::Integer, &[]), Value::Number(0.0));
}

#[test]
fn unsupported_type_is_rejected_at_build_time() {
    let err = reducer::build(ReducerKind::Avg, Some(ValueType::String)).unwrap_err();
    assert!(err.to_string().contains("avg does not accept"));
}

/// Property: `combine(reduce(G1), reduce(G2)) = reduce(G1 ∪
/// G2)` for every reducer, over an arbitrary partition point.
#[test]
fn combine_is_associative_across_all_reducers() {
    let values: Vec<Value> = (1..=9).map(Value::Integer).collect();
    for kind in [
        ReducerKind::Count,
        ReducerKind::Sum,
        ReducerKind::Avg,
        ReducerKind::Median,
        ReducerKind::Min,
        ReducerKind::Max,
        ReducerKind::StddevPop,
        ReducerKind::StddevSamp,
        ReducerKind::VarPop,
        ReducerKind::VarSamp,
    ] {
        let whole = reduce(kind, ValueType::Integer, &values);
        for split in 1..values.len() {
            let combined = split_reduce(kind, ValueType::Integer, &values, split);
            match (&whole, &combined) {
                (Value::Number(a), Value::Number(b)) => {
                    assert!((a - b).abs() < 1e-9, "{kind:?} split at {split}: {a} vs {b}")
                }
                (a, b) => assert_eq!(a, b, "{kind:?} split at {split}"),
            }
        }
    }
}
