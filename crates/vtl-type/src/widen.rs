// SPDX-License-Identifier: Apache-2.0

use crate::ValueType;

/// Numeric widening for binary arithmetic: Integer combined
/// with Number yields Number; Integer/Integer stays Integer. Returns `None`
/// for type combinations arithmetic does not accept (the caller raises
/// `UnsupportedType`).
pub fn widen(left: ValueType, right: ValueType) -> Option<ValueType> {
    use ValueType::*;
    match (left, right) {
        (Integer, Integer) => Some(Integer),
        (Integer, Number) | (Number, Integer) | (Number, Number) => Some(Number),
        _ => None,
    }
}
