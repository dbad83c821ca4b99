// SPDX-License-Identifier: Apache-2.0

use crate::{Context, ResolvableExpression, ScalarExpr};
use std::cmp::Ordering;
use vtl_diagnostic::{Error, Result};
use vtl_type::{Value, ValueType, widen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl CompareOp {
    fn symbol(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
        }
    }

    fn apply(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
        }
    }
}

/// `< <= > >= = <>`: total ordering on numerics with null
/// propagation, lexicographic (code-point) ordering on strings. Equality
/// and inequality additionally accept a pair of booleans.
#[derive(Debug)]
pub struct Comparison {
    left: ScalarExpr,
    right: ScalarExpr,
    op: CompareOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Numeric,
    String,
    Boolean,
}

impl Comparison {
    pub fn new(left: ScalarExpr, right: ScalarExpr, op: CompareOp) -> Result<Self> {
        let (lt, rt) = (left.result_type(), right.result_type());
        let category = if widen(lt, rt).is_some() {
            Category::Numeric
        } else if lt == ValueType::String && rt == ValueType::String {
            Category::String
        } else if lt == ValueType::Boolean && rt == ValueType::Boolean {
            Category::Boolean
        } else {
            return Err(Error::unsupported_type(format!(
                "{} does not accept operands of type {lt} and {rt}",
                op.symbol()
            )));
        };
        if category == Category::Boolean && !matches!(op, CompareOp::Eq | CompareOp::Ne) {
            return Err(Error::unsupported_type(format!(
                "{} does not accept boolean operands",
                op.symbol()
            )));
        }
        Ok(Self { left, right, op })
    }
}

impl ResolvableExpression for Comparison {
    fn result_type(&self) -> ValueType {
        ValueType::Boolean
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let (l, r) = (self.left.resolve(ctx)?, self.right.resolve(ctx)?);
        let ordering = match (&l, &r) {
            (Value::Null, _) | (_, Value::Null) => return Ok(Value::Null),
            (Value::String(a), Value::String(b)) => a.as_str().cmp(b.as_str()),
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => unreachable!("construction validated operand type"),
            },
        };
        Ok(Value::Boolean(self.op.apply(ordering)))
    }
}
