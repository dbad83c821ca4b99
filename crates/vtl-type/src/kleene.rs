// SPDX-License-Identifier: Apache-2.0

//! SQL-style Kleene three-valued logic: `None` stands for
//! "unknown" (the scalar `Null`). These are pure `Option<bool>` functions so
//! callers that model null as `Value::Null` convert at the boundary.

pub fn and(left: Option<bool>, right: Option<bool>) -> Option<bool> {
    match (left, right) {
        (Some(false), _) | (_, Some(false)) => Some(false),
        (Some(true), Some(true)) => Some(true),
        _ => None,
    }
}

pub fn or(left: Option<bool>, right: Option<bool>) -> Option<bool> {
    match (left, right) {
        (Some(true), _) | (_, Some(true)) => Some(true),
        (Some(false), Some(false)) => Some(false),
        _ => None,
    }
}

pub fn not(value: Option<bool>) -> Option<bool> {
    value.map(|v| !v)
}

/// `xor` is not part of the classical Kleene connectives, but is extended
/// here the same way: an unknown operand makes the result unknown.
pub fn xor(left: Option<bool>, right: Option<bool>) -> Option<bool> {
    match (left, right) {
        (Some(a), Some(b)) => Some(a != b),
        _ => None,
    }
}
