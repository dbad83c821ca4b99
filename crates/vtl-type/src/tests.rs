// SPDX-License-Identifier: Apache-2.0

use crate::{Value, ValueType, kleene, widen};

#[test]
fn null_has_no_value_type() {
    assert_eq!(Value::Null.value_type(), None);
    assert!(Value::Null.is_null());
}

#[test]
fn typed_values_report_their_type() {
    assert_eq!(Value::Integer(1).value_type(), Some(ValueType::Integer));
    assert_eq!(Value::Number(1.0).value_type(), Some(ValueType::Number));
    assert_eq!(Value::String("a".into()).value_type(), Some(ValueType::String));
    assert_eq!(Value::Boolean(true).value_type(), Some(ValueType::Boolean));
}

#[test]
fn widening_promotes_integer_to_number() {
    assert_eq!(widen(ValueType::Integer, ValueType::Integer), Some(ValueType::Integer));
    assert_eq!(widen(ValueType::Integer, ValueType::Number), Some(ValueType::Number));
    assert_eq!(widen(ValueType::Number, ValueType::Integer), Some(ValueType::Number));
    assert_eq!(widen(ValueType::Number, ValueType::Number), Some(ValueType::Number));
}

#[test]
fn widening_rejects_non_numeric_combinations() {
    assert_eq!(widen(ValueType::String, ValueType::Integer), None);
    assert_eq!(widen(ValueType::Boolean, ValueType::Boolean), None);
}

#[test]
fn display_matches_literal_form() {
    assert_eq!(Value::Integer(3).to_string(), "3");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::Null.to_string(), "null");
}

#[test]
fn kleene_and_short_circuits_on_false() {
    assert_eq!(kleene::and(Some(false), None), Some(false));
    assert_eq!(kleene::and(None, Some(false)), Some(false));
    assert_eq!(kleene::and(Some(true), None), None);
    assert_eq!(kleene::and(Some(true), Some(true)), Some(true));
}

#[test]
fn kleene_or_short_circuits_on_true() {
    assert_eq!(kleene::or(Some(true), None), Some(true));
    assert_eq!(kleene::or(None, Some(true)), Some(true));
    assert_eq!(kleene::or(Some(false), None), None);
    assert_eq!(kleene::or(Some(false), Some(false)), Some(false));
}

#[test]
fn kleene_not_of_unknown_is_unknown() {
    assert_eq!(kleene::not(None), None);
    assert_eq!(kleene::not(Some(true)), Some(false));
}
