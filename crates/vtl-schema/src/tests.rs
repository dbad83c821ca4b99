// SPDX-License-Identifier: Apache-2.0

use crate::{Component, DataPoint, DataStructure, Role};
use std::sync::Arc;
use vtl_type::{Value, ValueType};

fn sample_structure() -> DataStructure {
    DataStructure::new(vec![
        Component::identifier("id", ValueType::String),
        Component::measure("obs", ValueType::Number),
        Component::attribute("unit", ValueType::String),
    ])
    .unwrap()
}

#[test]
fn rejects_duplicate_component_names() {
    let err = DataStructure::new(vec![
        Component::identifier("id", ValueType::String),
        Component::measure("id", ValueType::Number),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicate component name"));
}

#[test]
fn equality_is_by_multiset_not_order() {
    let a = DataStructure::new(vec![
        Component::identifier("id", ValueType::String),
        Component::measure("obs", ValueType::Number),
    ])
    .unwrap();
    let b = DataStructure::new(vec![
        Component::measure("obs", ValueType::Number),
        Component::identifier("id", ValueType::String),
    ])
    .unwrap();
    assert_eq!(a, b);
}

#[test]
fn role_views_partition_components() {
    let s = sample_structure();
    assert_eq!(s.identifiers().count(), 1);
    assert_eq!(s.measures().count(), 1);
    assert_eq!(s.attributes().count(), 1);
    assert!(s.has_identifier());
}

#[test]
fn structure_without_identifier_is_not_joinable() {
    let s = DataStructure::new(vec![Component::measure("obs", ValueType::Number)]).unwrap();
    assert!(s.require_joinable().is_err());
}

#[test]
fn data_point_rejects_arity_mismatch() {
    let structure = Arc::new(sample_structure());
    let err = DataPoint::new(structure, vec![Value::String("a".into())]).unwrap_err();
    assert!(err.to_string().contains("3 components"));
}

#[test]
fn data_point_access_by_name_and_position() {
    let structure = Arc::new(sample_structure());
    let point = DataPoint::new(
        structure,
        vec![Value::String("DE".into()), Value::Number(1.0), Value::Null],
    )
    .unwrap();
    assert_eq!(point.by_name("id"), Some(&Value::String("DE".into())));
    assert_eq!(point.by_position(1), Some(&Value::Number(1.0)));
    assert_eq!(point.by_name("missing"), None);
}

#[test]
fn role_display_matches_json_token() {
    assert_eq!(Role::Identifier.to_string(), "IDENTIFIER");
}
