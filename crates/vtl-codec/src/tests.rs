// SPDX-License-Identifier: Apache-2.0

use crate::{datapoints_from_csv, structure_from_json, structure_to_json};
use std::sync::Arc;
use vtl_schema::{Component, DataStructure, Role};
use vtl_type::{Value, ValueType};

#[test]
fn parses_the_component_json_schema() {
    let json = r#"[
        {"name": "id", "type": "INTEGER", "role": "IDENTIFIER"},
        {"name": "obs_value", "type": "NUMBER", "role": "MEASURE"},
        {"name": "note", "type": "STRING", "role": "ATTRIBUTE"}
    ]"#;
    let structure = structure_from_json(json).unwrap();
    assert_eq!(structure.len(), 3);
    assert_eq!(structure.get("id").unwrap().role, Role::Identifier);
    assert_eq!(structure.get("obs_value").unwrap().value_type, ValueType::Number);
    assert_eq!(structure.get("note").unwrap().role, Role::Attribute);
}

#[test]
fn rejects_an_unknown_type_token() {
    let json = r#"[{"name": "x", "type": "DECIMAL", "role": "MEASURE"}]"#;
    assert!(structure_from_json(json).is_err());
}

#[test]
fn round_trips_a_structure_through_json() {
    let structure = DataStructure::new(vec![
        Component::identifier("id", ValueType::Integer),
        Component::measure("v", ValueType::Number),
    ])
    .unwrap();
    let json = structure_to_json(&structure).unwrap();
    let round_tripped = structure_from_json(&json).unwrap();
    assert_eq!(structure, round_tripped);
}

#[test]
fn csv_rows_parse_positionally_with_empty_fields_as_null() {
    let structure = Arc::new(
        DataStructure::new(vec![
            Component::identifier("id", ValueType::Integer),
            Component::measure("v", ValueType::Number),
            Component::attribute("note", ValueType::String),
        ])
        .unwrap(),
    );
    let csv_text = "1,1.5,ok\n2,,\n";
    let rows = datapoints_from_csv(structure, csv_text.as_bytes()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].values(), &[Value::Integer(1), Value::Number(1.5), Value::String("ok".into())]);
    assert_eq!(rows[1].values(), &[Value::Integer(2), Value::Null, Value::Null]);
}

#[test]
fn csv_rejects_wrong_arity() {
    let structure = Arc::new(
        DataStructure::new(vec![Component::identifier("id", ValueType::Integer)]).unwrap(),
    );
    let csv_text = "1,2\n";
    assert!(datapoints_from_csv(structure, csv_text.as_bytes()).is_err());
}

#[test]
fn csv_rejects_unparseable_numeric_literal() {
    let structure = Arc::new(
        DataStructure::new(vec![Component::measure("v", ValueType::Integer)]).unwrap(),
    );
    let csv_text = "not-a-number\n";
    assert!(datapoints_from_csv(structure, csv_text.as_bytes()).is_err());
}
