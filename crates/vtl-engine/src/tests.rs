// SPDX-License-Identifier: Apache-2.0

use crate::test_utils::{id, in_memory, measure, point, structure};
use crate::{BoundValue, Environment, Evaluator, EvaluatorConfig, Statement};
use vtl_dataset::Filter;
use vtl_expr::scalar::{ColumnRef, CompareOp, Comparison, Constant, Identifier, IsNull};
use vtl_type::{Value, ValueType};

#[test]
fn binds_a_scalar_statement_and_overwrites_on_reassignment() {
    let mut env = Environment::new();
    let evaluator = Evaluator::default();

    let one = Box::new(Constant::new(Value::Integer(1)).unwrap());
    evaluator.execute(&mut env, Statement::scalar("x", one)).unwrap();
    assert_eq!(env.get_scalar("x"), Some(&Value::Integer(1)));

    let two = Box::new(Constant::new(Value::Integer(2)).unwrap());
    evaluator.execute(&mut env, Statement::scalar("x", two)).unwrap();
    assert_eq!(env.get_scalar("x"), Some(&Value::Integer(2)));
}

#[test]
fn a_failed_statement_leaves_prior_bindings_intact() {
    let mut env = Environment::new();
    let evaluator = Evaluator::default();

    let one = Box::new(Constant::new(Value::Integer(1)).unwrap());
    evaluator.execute(&mut env, Statement::scalar("x", one)).unwrap();

    let undefined = Box::new(Identifier::new("missing", ValueType::Integer));
    let err = evaluator.execute(&mut env, Statement::scalar("x", undefined));
    assert!(err.is_err());
    assert_eq!(env.get_scalar("x"), Some(&Value::Integer(1)));
}

#[test]
fn scalar_statements_may_reference_earlier_bindings() {
    let mut env = Environment::new();
    let evaluator = Evaluator::default();

    let one = Box::new(Constant::new(Value::Integer(1)).unwrap());
    evaluator.execute(&mut env, Statement::scalar("x", one)).unwrap();

    let lookup = Box::new(Identifier::new("x", ValueType::Integer));
    let result = evaluator.execute(&mut env, Statement::scalar("y", lookup)).unwrap();
    assert_eq!(result.as_scalar(), Some(&Value::Integer(1)));
}

#[test]
fn environment_names_preserve_insertion_order() {
    let mut env = Environment::new();
    env.bind("b", BoundValue::Scalar(Value::Integer(1)));
    env.bind("a", BoundValue::Scalar(Value::Integer(2)));
    env.bind("b", BoundValue::Scalar(Value::Integer(3)));
    assert_eq!(env.names().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(env.get_scalar("b"), Some(&Value::Integer(3)));
}

#[test]
fn dataset_statements_are_bound_without_eager_materialization() {
    let mut env = Environment::new();
    let evaluator = Evaluator::default();

    let s = structure(&[id("id"), measure("v", ValueType::Integer)]);
    let rows = vec![
        point(&s, vec![Value::Integer(1), Value::Integer(10)]),
        point(&s, vec![Value::Integer(2), Value::Integer(20)]),
    ];
    let ds = in_memory(s, rows);

    let bound = evaluator.execute(&mut env, Statement::dataset("ds", ds)).unwrap();
    let handle = bound.as_dataset().unwrap();
    assert_eq!(handle.collect_rows().unwrap().len(), 2);
    assert_eq!(env.get_dataset("ds").unwrap().collect_rows().unwrap().len(), 2);
}

#[test]
fn validate_fail_fast_stops_at_first_row_error() {
    let s = structure(&[id("id"), measure("v", ValueType::Integer)]);
    let rows = vec![point(&s, vec![Value::Integer(1), Value::Integer(10)])];
    let ds = in_memory(s, rows);

    let predicate = Box::new(IsNull::new(Box::new(ColumnRef::new("missing", ValueType::Integer))));
    let filtered: vtl_dataset::DatasetHandle = std::sync::Arc::new(
        Filter::new(ds, predicate, std::sync::Arc::new(Environment::new())).unwrap(),
    );

    let evaluator = Evaluator::new(EvaluatorConfig { fail_fast: true });
    assert!(evaluator.validate(&filtered).is_err());
}

#[test]
fn comparison_scalar_statement_resolves_against_empty_context() {
    let mut env = Environment::new();
    let evaluator = Evaluator::default();

    let cmp = Box::new(
        Comparison::new(
            Box::new(Constant::new(Value::Integer(2)).unwrap()),
            Box::new(Constant::new(Value::Integer(3)).unwrap()),
            CompareOp::Lt,
        )
        .unwrap(),
    );
    let result = evaluator.execute(&mut env, Statement::scalar("lt", cmp)).unwrap();
    assert_eq!(result.as_scalar(), Some(&Value::Boolean(true)));
}
