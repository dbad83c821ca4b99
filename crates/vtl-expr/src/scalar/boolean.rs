// SPDX-License-Identifier: Apache-2.0

use crate::{Context, ResolvableExpression, ScalarExpr};
use vtl_diagnostic::{Error, Result};
use vtl_type::{Value, ValueType, kleene};

fn require_boolean(op: &str, expr: &ScalarExpr) -> Result<()> {
    if expr.result_type() == ValueType::Boolean {
        Ok(())
    } else {
        Err(Error::unsupported_type(format!("{op} requires a boolean operand, found {}", expr.result_type())))
    }
}

fn as_bool(value: Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(b),
        Value::Null => None,
        _ => unreachable!("construction validated operand type"),
    }
}

macro_rules! binary_boolean {
    ($name:ident, $op:literal, $kleene:path) => {
        #[doc = concat!("`", $op, "`: Kleene three-valued logic.")]
        #[derive(Debug)]
        pub struct $name {
            left: ScalarExpr,
            right: ScalarExpr,
        }

        impl $name {
            pub fn new(left: ScalarExpr, right: ScalarExpr) -> Result<Self> {
                require_boolean($op, &left)?;
                require_boolean($op, &right)?;
                Ok(Self { left, right })
            }
        }

        impl ResolvableExpression for $name {
            fn result_type(&self) -> ValueType {
                ValueType::Boolean
            }

            /// Both sides are resolved regardless of the result: Kleene
            /// logic does not short-circuit.
            fn resolve(&self, ctx: &Context) -> Result<Value> {
                let left = as_bool(self.left.resolve(ctx)?);
                let right = as_bool(self.right.resolve(ctx)?);
                Ok(Value::from($kleene(left, right)))
            }
        }
    };
}

binary_boolean!(And, "and", kleene::and);
binary_boolean!(Or, "or", kleene::or);
binary_boolean!(Xor, "xor", kleene::xor);

/// `not`: Kleene negation.
#[derive(Debug)]
pub struct Not {
    operand: ScalarExpr,
}

impl Not {
    pub fn new(operand: ScalarExpr) -> Result<Self> {
        require_boolean("not", &operand)?;
        Ok(Self { operand })
    }
}

impl ResolvableExpression for Not {
    fn result_type(&self) -> ValueType {
        ValueType::Boolean
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let operand = as_bool(self.operand.resolve(ctx)?);
        Ok(Value::from(kleene::not(operand)))
    }
}
