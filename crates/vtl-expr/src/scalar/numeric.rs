// SPDX-License-Identifier: Apache-2.0

use crate::{Context, ResolvableExpression, ScalarExpr};
use vtl_diagnostic::{Error, Result};
use vtl_type::{Value, ValueType};

fn require_numeric(op: &str, expr: &ScalarExpr) -> Result<ValueType> {
    match expr.result_type() {
        t @ (ValueType::Integer | ValueType::Number) => Ok(t),
        t => Err(Error::unsupported_type(format!("{op} requires a numeric operand, found {t}"))),
    }
}

/// `abs(x)`: result type matches the operand's (Integer stays
/// Integer via checked negation, overflow yields `Null` per the pinned
/// overflow policy; Number stays Number).
#[derive(Debug)]
pub struct Abs {
    operand: ScalarExpr,
    result_type: ValueType,
}

impl Abs {
    pub fn new(operand: ScalarExpr) -> Result<Self> {
        let result_type = require_numeric("abs", &operand)?;
        Ok(Self { operand, result_type })
    }
}

impl ResolvableExpression for Abs {
    fn result_type(&self) -> ValueType {
        self.result_type
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        match self.operand.resolve(ctx)? {
            Value::Integer(v) => {
                Ok(v.checked_abs().map(Value::Integer).unwrap_or(Value::Null))
            }
            Value::Number(v) => Ok(Value::Number(v.abs())),
            Value::Null => Ok(Value::Null),
            _ => unreachable!("construction validated operand type"),
        }
    }
}

/// Shared shape for the single-operand numeric functions whose result is
/// always Integer (`ceil`, `floor`) or always Number (`sqrt`, `ln`, `exp`):
/// take a numeric operand, apply a float function, optionally reject the
/// domain (negative inputs for `sqrt`/`ln`) by yielding null.
macro_rules! unary_numeric {
    ($name:ident, $op:literal, $result_type:expr, $apply:expr) => {
        #[doc = concat!("`", $op, "(x)`.")]
        #[derive(Debug)]
        pub struct $name {
            operand: ScalarExpr,
        }

        impl $name {
            pub fn new(operand: ScalarExpr) -> Result<Self> {
                require_numeric($op, &operand)?;
                Ok(Self { operand })
            }
        }

        impl ResolvableExpression for $name {
            fn result_type(&self) -> ValueType {
                $result_type
            }

            fn resolve(&self, ctx: &Context) -> Result<Value> {
                match self.operand.resolve(ctx)?.as_f64() {
                    Some(v) => Ok(($apply)(v)),
                    None => Ok(Value::Null),
                }
            }
        }
    };
}

unary_numeric!(Ceil, "ceil", ValueType::Integer, |v: f64| Value::Integer(v.ceil() as i64));
unary_numeric!(Floor, "floor", ValueType::Integer, |v: f64| Value::Integer(v.floor() as i64));
unary_numeric!(Sqrt, "sqrt", ValueType::Number, |v: f64| if v < 0.0 {
    Value::Null
} else {
    Value::Number(v.sqrt())
});
unary_numeric!(Ln, "ln", ValueType::Number, |v: f64| if v < 0.0 {
    Value::Null
} else {
    Value::Number(v.ln())
});
unary_numeric!(Exp, "exp", ValueType::Number, |v: f64| Value::Number(v.exp()));

/// `round(x, n)`: Number result, `n` decimal places.
#[derive(Debug)]
pub struct Round {
    operand: ScalarExpr,
    precision: ScalarExpr,
}

/// `trunc(x, n)`: Number result, truncate toward zero at `n`
/// decimal places.
#[derive(Debug)]
pub struct Trunc {
    operand: ScalarExpr,
    precision: ScalarExpr,
}

fn require_precision(op: &str, expr: &ScalarExpr) -> Result<()> {
    if expr.result_type() == ValueType::Integer {
        Ok(())
    } else {
        Err(Error::unsupported_type(format!(
            "{op} precision must be Integer, found {}",
            expr.result_type()
        )))
    }
}

fn scale(n: i64) -> f64 {
    10f64.powi(n as i32)
}

impl Round {
    pub fn new(operand: ScalarExpr, precision: ScalarExpr) -> Result<Self> {
        require_numeric("round", &operand)?;
        require_precision("round", &precision)?;
        Ok(Self { operand, precision })
    }
}

impl ResolvableExpression for Round {
    fn result_type(&self) -> ValueType {
        ValueType::Number
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let Some(v) = self.operand.resolve(ctx)?.as_f64() else { return Ok(Value::Null) };
        let Value::Integer(n) = self.precision.resolve(ctx)? else { return Ok(Value::Null) };
        let scale = scale(n);
        Ok(Value::Number((v * scale).round() / scale))
    }
}

impl Trunc {
    pub fn new(operand: ScalarExpr, precision: ScalarExpr) -> Result<Self> {
        require_numeric("trunc", &operand)?;
        require_precision("trunc", &precision)?;
        Ok(Self { operand, precision })
    }
}

impl ResolvableExpression for Trunc {
    fn result_type(&self) -> ValueType {
        ValueType::Number
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let Some(v) = self.operand.resolve(ctx)?.as_f64() else { return Ok(Value::Null) };
        let Value::Integer(n) = self.precision.resolve(ctx)? else { return Ok(Value::Null) };
        let scale = scale(n);
        Ok(Value::Number((v * scale).trunc() / scale))
    }
}

/// `log(x, base)`: Number result. `log(x, 1)` and negative
/// `x` both yield null (undefined in the reals).
#[derive(Debug)]
pub struct Log {
    operand: ScalarExpr,
    base: ScalarExpr,
}

impl Log {
    pub fn new(operand: ScalarExpr, base: ScalarExpr) -> Result<Self> {
        require_numeric("log", &operand)?;
        require_numeric("log", &base)?;
        Ok(Self { operand, base })
    }
}

impl ResolvableExpression for Log {
    fn result_type(&self) -> ValueType {
        ValueType::Number
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let (Some(x), Some(base)) =
            (self.operand.resolve(ctx)?.as_f64(), self.base.resolve(ctx)?.as_f64())
        else {
            return Ok(Value::Null);
        };
        if x < 0.0 || base == 1.0 || base <= 0.0 {
            return Ok(Value::Null);
        }
        Ok(Value::Number(x.log(base)))
    }
}

/// `power(x, y)`: Number result.
#[derive(Debug)]
pub struct Power {
    base: ScalarExpr,
    exponent: ScalarExpr,
}

impl Power {
    pub fn new(base: ScalarExpr, exponent: ScalarExpr) -> Result<Self> {
        require_numeric("power", &base)?;
        require_numeric("power", &exponent)?;
        Ok(Self { base, exponent })
    }
}

impl ResolvableExpression for Power {
    fn result_type(&self) -> ValueType {
        ValueType::Number
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let (Some(base), Some(exp)) =
            (self.base.resolve(ctx)?.as_f64(), self.exponent.resolve(ctx)?.as_f64())
        else {
            return Ok(Value::Null);
        };
        Ok(Value::Number(base.powf(exp)))
    }
}

/// `mod(x, y)`: result type matches the widened operand type
/// (Integer/Integer stays Integer, any Number operand widens the result to
/// Number). `mod(x, 0)` yields null.
#[derive(Debug)]
pub struct Mod {
    left: ScalarExpr,
    right: ScalarExpr,
    result_type: ValueType,
}

impl Mod {
    pub fn new(left: ScalarExpr, right: ScalarExpr) -> Result<Self> {
        let lt = require_numeric("mod", &left)?;
        let rt = require_numeric("mod", &right)?;
        let result_type =
            if lt == ValueType::Integer && rt == ValueType::Integer { ValueType::Integer } else { ValueType::Number };
        Ok(Self { left, right, result_type })
    }
}

impl ResolvableExpression for Mod {
    fn result_type(&self) -> ValueType {
        self.result_type
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let (l, r) = (self.left.resolve(ctx)?, self.right.resolve(ctx)?);
        match (l, r) {
            (Value::Integer(_), Value::Integer(0)) => Ok(Value::Null),
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.rem_euclid(b))),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(_), Some(b)) if b == 0.0 => Ok(Value::Null),
                (Some(a), Some(b)) => Ok(Value::Number(a.rem_euclid(b))),
                _ => Ok(Value::Null),
            },
        }
    }
}
