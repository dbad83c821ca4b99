// SPDX-License-Identifier: Apache-2.0

use vtl_schema::DataPoint;
use vtl_type::Value;

/// The binding-store contract an expression's [`Context`] consults for
/// identifier lookups. `vtl-engine::Environment` is the
/// production implementation; this trait lives here, not in `vtl-engine`,
/// so `vtl-expr` does not depend on the evaluator crate that depends on it.
pub trait Bindings: std::fmt::Debug {
    fn lookup(&self, name: &str) -> Option<Value>;
}

/// The context a [`crate::ResolvableExpression`] resolves against: either an
/// empty context (constants and identifier lookups against the environment)
/// or a data-point context for row-wise operators.
pub struct Context<'a> {
    bindings: &'a dyn Bindings,
    row: Option<&'a DataPoint>,
}

impl<'a> Context<'a> {
    pub fn empty(bindings: &'a dyn Bindings) -> Self {
        Self { bindings, row: None }
    }

    pub fn row(bindings: &'a dyn Bindings, row: &'a DataPoint) -> Self {
        Self { bindings, row: Some(row) }
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.lookup(name)
    }

    pub fn row_value(&self, name: &str) -> Option<Value> {
        self.row.and_then(|row| row.by_name(name)).cloned()
    }

    pub fn data_point(&self) -> Option<&DataPoint> {
        self.row
    }
}
