// SPDX-License-Identifier: Apache-2.0

use crate::{Context, ResolvableExpression, ScalarExpr};
use vtl_diagnostic::{Error, Result};
use vtl_type::{Value, ValueType, widen};

/// `if cond then a else b`. `cond` must be Boolean; a null
/// condition yields a null result. Both branches must share a common
/// widened type.
#[derive(Debug)]
pub struct If {
    condition: ScalarExpr,
    then_branch: ScalarExpr,
    else_branch: ScalarExpr,
    result_type: ValueType,
}

impl If {
    pub fn new(condition: ScalarExpr, then_branch: ScalarExpr, else_branch: ScalarExpr) -> Result<Self> {
        if condition.result_type() != ValueType::Boolean {
            return Err(Error::unsupported_type(format!(
                "if condition must be boolean, found {}",
                condition.result_type()
            )));
        }
        let (tt, et) = (then_branch.result_type(), else_branch.result_type());
        let result_type = if tt == et {
            tt
        } else {
            widen(tt, et).ok_or_else(|| {
                Error::unsupported_type(format!(
                    "if branches have incompatible types {tt} and {et}"
                ))
            })?
        };
        Ok(Self { condition, then_branch, else_branch, result_type })
    }
}

impl ResolvableExpression for If {
    fn result_type(&self) -> ValueType {
        self.result_type
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let chosen = match self.condition.resolve(ctx)? {
            Value::Boolean(true) => self.then_branch.resolve(ctx)?,
            Value::Boolean(false) => self.else_branch.resolve(ctx)?,
            Value::Null => return Ok(Value::Null),
            _ => unreachable!("construction validated condition type"),
        };
        Ok(coerce(chosen, self.result_type))
    }
}

/// Coerces a branch's resolved value up to the `if` expression's widened
/// declared type, so `result_type()` always agrees with the dynamic type of
/// `resolve`'s output (e.g. an Integer `then` branch under a Number result
/// type, from a Number `else` branch).
fn coerce(value: Value, result_type: ValueType) -> Value {
    match (value, result_type) {
        (Value::Integer(v), ValueType::Number) => Value::Number(v as f64),
        (value, _) => value,
    }
}
