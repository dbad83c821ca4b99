// SPDX-License-Identifier: Apache-2.0

use crate::scalar::constant::Constant;
use crate::scalar::identifier::{ColumnRef, Identifier};
use crate::{Context, ResolvableExpression, ScalarExpr};
use vtl_diagnostic::{Error, Result};
use vtl_type::{Value, ValueType};

fn require_string(op: &str, expr: &ScalarExpr) -> Result<()> {
    if expr.result_type() == ValueType::String {
        Ok(())
    } else {
        Err(Error::unsupported_type(format!(
            "{op} requires a string operand, found {}",
            expr.result_type()
        )))
    }
}

fn require_integer(op: &str, expr: &ScalarExpr) -> Result<()> {
    if expr.result_type() == ValueType::Integer {
        Ok(())
    } else {
        Err(Error::unsupported_type(format!(
            "{op} requires an integer operand, found {}",
            expr.result_type()
        )))
    }
}

/// Renders an expression's literal source form for diagnostic messages.
/// Only constants and name lookups have a literal form; any
/// other sub-expression renders as `?` since this engine has no parser
/// behind it to recover original source text.
fn literal_form(expr: &ScalarExpr) -> String {
    if let Some(c) = expr.as_any().downcast_ref::<Constant>() {
        return match c.literal_value() {
            Value::String(s) => format!("\"{s}\""),
            other => other.to_string(),
        };
    }
    if let Some(i) = expr.as_any().downcast_ref::<Identifier>() {
        return i.name().to_string();
    }
    if let Some(c) = expr.as_any().downcast_ref::<ColumnRef>() {
        return c.name().to_string();
    }
    "?".to_string()
}

macro_rules! trim_fn {
    ($name:ident, $op:literal, $impl:expr) => {
        #[doc = concat!("`", $op, "`: strips leading/trailing ASCII whitespace.")]
        #[derive(Debug)]
        pub struct $name {
            operand: ScalarExpr,
        }

        impl $name {
            pub fn new(operand: ScalarExpr) -> Result<Self> {
                require_string($op, &operand)?;
                Ok(Self { operand })
            }
        }

        impl ResolvableExpression for $name {
            fn result_type(&self) -> ValueType {
                ValueType::String
            }

            fn resolve(&self, ctx: &Context) -> Result<Value> {
                match self.operand.resolve(ctx)? {
                    Value::String(s) => Ok(Value::String(($impl)(&s))),
                    Value::Null => Ok(Value::Null),
                    _ => unreachable!("construction validated operand type"),
                }
            }
        }
    };
}

const ASCII_WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

trim_fn!(Trim, "trim", |s: &str| s.trim_matches(&ASCII_WHITESPACE[..]).to_string());
trim_fn!(Ltrim, "ltrim", |s: &str| s.trim_start_matches(&ASCII_WHITESPACE[..]).to_string());
trim_fn!(Rtrim, "rtrim", |s: &str| s.trim_end_matches(&ASCII_WHITESPACE[..]).to_string());

macro_rules! case_fn {
    ($name:ident, $op:literal, $impl:expr) => {
        #[doc = concat!("`", $op, "`: Unicode default case folding.")]
        #[derive(Debug)]
        pub struct $name {
            operand: ScalarExpr,
        }

        impl $name {
            pub fn new(operand: ScalarExpr) -> Result<Self> {
                require_string($op, &operand)?;
                Ok(Self { operand })
            }
        }

        impl ResolvableExpression for $name {
            fn result_type(&self) -> ValueType {
                ValueType::String
            }

            fn resolve(&self, ctx: &Context) -> Result<Value> {
                match self.operand.resolve(ctx)? {
                    Value::String(s) => Ok(Value::String(($impl)(&s))),
                    Value::Null => Ok(Value::Null),
                    _ => unreachable!("construction validated operand type"),
                }
            }
        }
    };
}

case_fn!(Upper, "upper", |s: &str| s.to_uppercase());
case_fn!(Lower, "lower", |s: &str| s.to_lowercase());

/// `length(s)`: Integer count of Unicode code points, not
/// bytes.
#[derive(Debug)]
pub struct Length {
    operand: ScalarExpr,
}

impl Length {
    pub fn new(operand: ScalarExpr) -> Result<Self> {
        require_string("length", &operand)?;
        Ok(Self { operand })
    }
}

impl ResolvableExpression for Length {
    fn result_type(&self) -> ValueType {
        ValueType::Integer
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        match self.operand.resolve(ctx)? {
            Value::String(s) => Ok(Value::Integer(s.chars().count() as i64)),
            Value::Null => Ok(Value::Null),
            _ => unreachable!("construction validated operand type"),
        }
    }
}

/// `substr(s)` / `substr(s, start)` / `substr(s, start, length)`. `start` is 0-based inclusive; `length` is the end bound,
/// clamped to `[start, len(s)]` (so `substr("abcde", 1, 3)` yields
/// `"bc"`, the code points at indices 1 and 2). More than three total
/// positional arguments (the string plus up to two of `start`/`length`)
/// raises `UnsupportedOperation` bearing the call's literal form, at
/// construction time.
#[derive(Debug)]
pub struct Substr {
    string: ScalarExpr,
    start: Option<ScalarExpr>,
    length: Option<ScalarExpr>,
    call_literal: String,
}

impl Substr {
    pub fn new(args: Vec<ScalarExpr>) -> Result<Self> {
        if args.is_empty() {
            return Err(Error::invalid_argument("substr requires at least one argument"));
        }
        let call_literal =
            format!("substr({})", args.iter().map(literal_form).collect::<Vec<_>>().join(","));

        let positional = args.len() - 1;
        if positional > 2 {
            tracing::debug!(call = %call_literal, positional, "rejecting substr call");
            return Err(Error::unsupported_operation(format!(
                "too many args ({positional}) for: {call_literal}"
            )));
        }

        let mut iter = args.into_iter();
        let string = iter.next().unwrap();
        require_string("substr", &string)?;
        let start = iter.next();
        if let Some(s) = &start {
            require_integer("substr", s)?;
        }
        let length = iter.next();
        if let Some(l) = &length {
            require_integer("substr", l)?;
        }

        Ok(Self { string, start, length, call_literal })
    }
}

impl ResolvableExpression for Substr {
    fn result_type(&self) -> ValueType {
        ValueType::String
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        let s = match self.string.resolve(ctx)? {
            Value::String(s) => s,
            Value::Null => return Ok(Value::Null),
            _ => unreachable!("construction validated operand type"),
        };
        let chars: Vec<char> = s.chars().collect();
        let len = chars.len() as i64;

        let start = match &self.start {
            Some(e) => match e.resolve(ctx)? {
                Value::Integer(n) => n,
                Value::Null => return Ok(Value::Null),
                _ => unreachable!("construction validated operand type"),
            },
            None => 0,
        };
        let requested_length = match &self.length {
            Some(e) => match e.resolve(ctx)? {
                Value::Integer(n) => Some(n),
                Value::Null => return Ok(Value::Null),
                _ => unreachable!("construction validated operand type"),
            },
            None => None,
        };

        let start = start.clamp(0, len) as usize;
        let end = match requested_length {
            Some(l) => l.clamp(start as i64, len) as usize,
            None => len as usize,
        };

        Ok(Value::String(chars[start..end].iter().collect()))
    }
}

impl Substr {
    /// Exposed for tests that want to assert the exact literal form the
    /// construction-time error would carry.
    #[cfg(test)]
    pub(crate) fn call_literal(&self) -> &str {
        &self.call_literal
    }
}
