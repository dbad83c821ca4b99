// SPDX-License-Identifier: Apache-2.0

use crate::{Context, ResolvableExpression};
use vtl_diagnostic::{Error, Result};
use vtl_type::{Value, ValueType};

/// A lookup of a top-level binding in the environment.
/// The declared type is supplied at construction time by whatever already
/// knows the binding's type (the parser, consulting the environment it is
/// about to hand the evaluator).
#[derive(Debug, Clone)]
pub struct Identifier {
    name: String,
    declared_type: ValueType,
}

impl Identifier {
    pub fn new(name: impl Into<String>, declared_type: ValueType) -> Self {
        Self { name: name.into(), declared_type }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

impl ResolvableExpression for Identifier {
    fn result_type(&self) -> ValueType {
        self.declared_type
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        ctx.lookup(&self.name)
            .ok_or_else(|| Error::undefined_reference(format!("undefined reference: {}", self.name)))
    }
}

/// A reference to a named component of the current row. Distinct from [`Identifier`]: this resolves against
/// the row, not the environment.
#[derive(Debug, Clone)]
pub struct ColumnRef {
    name: String,
    declared_type: ValueType,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>, declared_type: ValueType) -> Self {
        Self { name: name.into(), declared_type }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ResolvableExpression for ColumnRef {
    fn result_type(&self) -> ValueType {
        self.declared_type
    }

    fn resolve(&self, ctx: &Context) -> Result<Value> {
        match ctx.data_point() {
            Some(point) => point.by_name(&self.name).cloned().ok_or_else(|| {
                Error::undefined_reference(format!("no such component: {}", self.name))
            }),
            None => Err(Error::invalid_argument(format!(
                "column reference {} resolved outside of a row context",
                self.name
            ))),
        }
    }
}
