// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use vtl_dataset::DatasetHandle;
use vtl_expr::Bindings;
use vtl_type::Value;

/// A name's bound value: a scalar or a dataset. Kept as a
/// small enum rather than folding `Dataset` into [`Value`] for the same
/// reason `vtl-expr`'s `ResolvableExpression` stays scalar-only — datasets
/// are not scalar-sized values.
#[derive(Debug, Clone)]
pub enum BoundValue {
    Scalar(Value),
    Dataset(DatasetHandle),
}

impl BoundValue {
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            BoundValue::Scalar(v) => Some(v),
            BoundValue::Dataset(_) => None,
        }
    }

    pub fn as_dataset(&self) -> Option<&DatasetHandle> {
        match self {
            BoundValue::Dataset(d) => Some(d),
            BoundValue::Scalar(_) => None,
        }
    }
}

/// The binding store: a flat, single-scope mapping from
/// identifier name to a bound value. Assignments overwrite any prior
/// binding under the same name; iteration preserves insertion order for
/// diagnostic listing, not for semantics, hence `IndexMap`
/// rather than a `HashMap`.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: IndexMap<String, BoundValue>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, overwriting any prior binding.
    pub fn bind(&mut self, name: impl Into<String>, value: BoundValue) {
        self.bindings.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&BoundValue> {
        self.bindings.get(name)
    }

    pub fn get_scalar(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(BoundValue::as_scalar)
    }

    pub fn get_dataset(&self, name: &str) -> Option<&DatasetHandle> {
        self.get(name).and_then(BoundValue::as_dataset)
    }

    /// Names in insertion order, for diagnostic listing.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Bindings for Environment {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.get_scalar(name).cloned()
    }
}
