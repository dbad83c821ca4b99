// SPDX-License-Identifier: Apache-2.0

use crate::{Context, ResolvableExpression};
use vtl_diagnostic::{Error, Result};
use vtl_type::{Value, ValueType};

/// A literal value carrying its own type tag. A null constant must name its
/// declared type explicitly since `Value::Null` alone carries none.
#[derive(Debug, Clone)]
pub struct Constant {
    value: Value,
    declared_type: ValueType,
}

impl Constant {
    pub fn new(value: Value) -> Result<Self> {
        match value.value_type() {
            Some(declared_type) => Ok(Self { value, declared_type }),
            None => Err(Error::unsupported_type(
                "a null constant must be built with Constant::null(type) to carry a declared type",
            )),
        }
    }

    pub fn null(declared_type: ValueType) -> Self {
        Self { value: Value::Null, declared_type }
    }

    /// Exposes the literal value for diagnostic rendering (e.g. `substr`'s
    /// argument-count error needs to print a call's literal form).
    pub(crate) fn literal_value(&self) -> &Value {
        &self.value
    }
}

impl ResolvableExpression for Constant {
    fn result_type(&self) -> ValueType {
        self.declared_type
    }

    fn resolve(&self, _ctx: &Context) -> Result<Value> {
        Ok(self.value.clone())
    }
}
