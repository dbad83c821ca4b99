// SPDX-License-Identifier: Apache-2.0

use crate::{Context, ResolvableExpression, ScalarExpr};
use vtl_diagnostic::{Error, Result};
use vtl_type::{Value, ValueType, widen};

/// Shared construction check for the binary arithmetic operators: both
/// operands must widen to a numeric result type.
fn numeric_result(op: &str, left: &ScalarExpr, right: &ScalarExpr) -> Result<ValueType> {
    let lt = left.result_type();
    let rt = right.result_type();
    widen(lt, rt).ok_or_else(|| {
        Error::unsupported_type(format!("{op} does not accept operands of type {lt} and {rt}"))
    })
}

/// `+`: checked addition. Overflow yields `Null` rather than panicking or
/// wrapping; a null operand also yields `Null`.
#[derive(Debug)]
pub struct Add {
    left: ScalarExpr,
    right: ScalarExpr,
    result_type: ValueType,
}

impl Add {
    pub fn new(left: ScalarExpr, right: ScalarExpr) -> Result<Self> {
        let result_type = numeric_result("+", &left, &right)?;
        Ok(Self { left, right, result_type })
    }
}

impl ResolvableExpression for Add {
    fn result_type(&self) -> ValueType {
        self.result_type
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let (l, r) = (self.left.resolve(ctx)?, self.right.resolve(ctx)?);
        Ok(binary_numeric(&l, &r, i64::checked_add, |a, b| a + b))
    }
}

/// `-` (binary): checked subtraction, same null/overflow rules as [`Add`].
#[derive(Debug)]
pub struct Sub {
    left: ScalarExpr,
    right: ScalarExpr,
    result_type: ValueType,
}

impl Sub {
    pub fn new(left: ScalarExpr, right: ScalarExpr) -> Result<Self> {
        let result_type = numeric_result("-", &left, &right)?;
        Ok(Self { left, right, result_type })
    }
}

impl ResolvableExpression for Sub {
    fn result_type(&self) -> ValueType {
        self.result_type
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let (l, r) = (self.left.resolve(ctx)?, self.right.resolve(ctx)?);
        Ok(binary_numeric(&l, &r, i64::checked_sub, |a, b| a - b))
    }
}

/// `*`: checked multiplication, same null/overflow rules as [`Add`].
#[derive(Debug)]
pub struct Mul {
    left: ScalarExpr,
    right: ScalarExpr,
    result_type: ValueType,
}

impl Mul {
    pub fn new(left: ScalarExpr, right: ScalarExpr) -> Result<Self> {
        let result_type = numeric_result("*", &left, &right)?;
        Ok(Self { left, right, result_type })
    }
}

impl ResolvableExpression for Mul {
    fn result_type(&self) -> ValueType {
        self.result_type
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let (l, r) = (self.left.resolve(ctx)?, self.right.resolve(ctx)?);
        Ok(binary_numeric(&l, &r, i64::checked_mul, |a, b| a * b))
    }
}

/// `/`: always produces Number; division by zero
/// yields `Null`, not an error.
#[derive(Debug)]
pub struct Div {
    left: ScalarExpr,
    right: ScalarExpr,
}

impl Div {
    pub fn new(left: ScalarExpr, right: ScalarExpr) -> Result<Self> {
        numeric_result("/", &left, &right)?;
        Ok(Self { left, right })
    }
}

impl ResolvableExpression for Div {
    fn result_type(&self) -> ValueType {
        ValueType::Number
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let (l, r) = (self.left.resolve(ctx)?, self.right.resolve(ctx)?);
        match (l.as_f64(), r.as_f64()) {
            (Some(_), Some(b)) if b == 0.0 => Ok(Value::Null),
            (Some(a), Some(b)) => Ok(Value::Number(a / b)),
            _ => Ok(Value::Null),
        }
    }
}

/// Unary `-`.
#[derive(Debug)]
pub struct Neg {
    operand: ScalarExpr,
    result_type: ValueType,
}

impl Neg {
    pub fn new(operand: ScalarExpr) -> Result<Self> {
        let result_type = match operand.result_type() {
            t @ (ValueType::Integer | ValueType::Number) => t,
            t => return Err(Error::unsupported_type(format!("unary - does not accept {t}"))),
        };
        Ok(Self { operand, result_type })
    }
}

impl ResolvableExpression for Neg {
    fn result_type(&self) -> ValueType {
        self.result_type
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        match self.operand.resolve(ctx)? {
            Value::Integer(v) => Ok(v.checked_neg().map(Value::Integer).unwrap_or(Value::Null)),
            Value::Number(v) => Ok(Value::Number(-v)),
            Value::Null => Ok(Value::Null),
            _ => unreachable!("construction validated operand type"),
        }
    }
}

/// Unary `+`: identity on a numeric operand.
#[derive(Debug)]
pub struct Pos {
    operand: ScalarExpr,
    result_type: ValueType,
}

impl Pos {
    pub fn new(operand: ScalarExpr) -> Result<Self> {
        let result_type = match operand.result_type() {
            t @ (ValueType::Integer | ValueType::Number) => t,
            t => return Err(Error::unsupported_type(format!("unary + does not accept {t}"))),
        };
        Ok(Self { operand, result_type })
    }
}

impl ResolvableExpression for Pos {
    fn result_type(&self) -> ValueType {
        self.result_type
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        self.operand.resolve(ctx)
    }
}

/// Applies a checked integer op when both operands are Integer, otherwise
/// widens to Number and applies the floating-point op. A null operand
/// short-circuits to `Null`.
fn binary_numeric(
    left: &Value,
    right: &Value,
    int_op: impl Fn(i64, i64) -> Option<i64>,
    num_op: impl Fn(f64, f64) -> f64,
) -> Value {
    match (left, right) {
        (Value::Null, _) | (_, Value::Null) => Value::Null,
        (Value::Integer(a), Value::Integer(b)) => {
            int_op(*a, *b).map(Value::Integer).unwrap_or(Value::Null)
        }
        (a, b) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => Value::Number(num_op(a, b)),
            _ => Value::Null,
        },
    }
}
