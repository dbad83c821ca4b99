// SPDX-License-Identifier: Apache-2.0

//! A full pipeline end to end: a CSV-ingested dataset
//! is filtered, aggregated, and bound into an `Environment`, alongside an
//! ordinary scalar statement.

use std::sync::Arc;
use vtl::aggregate::ReducerKind;
use vtl::codec::{datapoints_from_csv, structure_from_json};
use vtl::dataset::{Aggregate, AggregateMeasure, DatasetHandle, Filter, InMemoryDataset};
use vtl::expr::scalar::{CompareOp, Comparison, ColumnRef, Constant};
use vtl::expr::ResolvableExpression;
use vtl::{BoundValue, Environment, Evaluator, Statement, Value, ValueType};

#[test]
fn csv_dataset_flows_through_filter_aggregate_and_binds_into_the_environment() {
    let structure_json = r#"[
        {"name": "region", "type": "STRING", "role": "IDENTIFIER"},
        {"name": "amount", "type": "INTEGER", "role": "MEASURE"}
    ]"#;
    let structure = Arc::new(structure_from_json(structure_json).unwrap());

    let csv_text = "east,100\neast,300\nwest,50\nwest,150\nnorth,400\n";
    let rows = datapoints_from_csv(structure.clone(), csv_text.as_bytes()).unwrap();
    let dataset: DatasetHandle = Arc::new(InMemoryDataset::new(structure, rows));

    let mut env = Environment::new();
    let evaluator = Evaluator::default();

    let predicate: Box<dyn ResolvableExpression> = Box::new(
        Comparison::new(
            Box::new(ColumnRef::new("amount", ValueType::Integer)),
            Box::new(Constant::new(Value::Integer(100)).unwrap()),
            CompareOp::Gt,
        )
        .unwrap(),
    );
    let filtered: DatasetHandle =
        Arc::new(Filter::new(dataset, predicate, Arc::new(env_bindings())).unwrap());

    let aggregated: DatasetHandle = Arc::new(
        Aggregate::new(
            filtered,
            &["region".to_string()],
            vec![AggregateMeasure::new(
                "total",
                ReducerKind::Sum,
                Some(Box::new(ColumnRef::new("amount", ValueType::Integer))),
            )],
            Arc::new(env_bindings()),
        )
        .unwrap(),
    );

    let bound = evaluator.execute(&mut env, Statement::dataset("by_region", aggregated)).unwrap();
    let BoundValue::Dataset(handle) = bound else { panic!("expected a dataset binding") };
    let mut rows = handle.collect_rows().unwrap();
    rows.sort_by(|a, b| a.by_name("region").unwrap().to_string().cmp(&b.by_name("region").unwrap().to_string()));

    // amount > 100 keeps east's 300, west's 150, and north's 400 (east's 100 is excluded).
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].by_name("region"), Some(&Value::String("east".into())));
    assert_eq!(rows[0].by_name("total"), Some(&Value::Integer(300)));

    evaluator
        .execute(&mut env, Statement::scalar("threshold", Box::new(Constant::new(Value::Integer(100)).unwrap())))
        .unwrap();
    assert_eq!(env.get_scalar("threshold"), Some(&Value::Integer(100)));
    assert_eq!(env.names().collect::<Vec<_>>(), vec!["by_region", "threshold"]);
}

#[derive(Debug)]
struct EnvBindings;

fn env_bindings() -> EnvBindings {
    EnvBindings
}

impl vtl::expr::Bindings for EnvBindings {
    fn lookup(&self, _name: &str) -> Option<Value> {
        None
    }
}
