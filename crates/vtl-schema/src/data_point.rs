// SPDX-License-Identifier: Apache-2.0

use crate::DataStructure;
use std::sync::Arc;
use vtl_diagnostic::{Error, Result};
use vtl_type::Value;

/// A row: a tuple whose arity and positional types match a
/// [`DataStructure`]. Access is by component name or position.
/// A data point is immutable after construction.
#[derive(Clone, Debug)]
pub struct DataPoint {
    structure: Arc<DataStructure>,
    values: Vec<Value>,
}

impl DataPoint {
    pub fn new(structure: Arc<DataStructure>, values: Vec<Value>) -> Result<Self> {
        if values.len() != structure.len() {
            return Err(Error::invalid_argument(format!(
                "data point has {} values but structure declares {} components",
                values.len(),
                structure.len()
            )));
        }
        Ok(Self { structure, values })
    }

    pub fn structure(&self) -> &DataStructure {
        &self.structure
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn by_position(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn by_name(&self, name: &str) -> Option<&Value> {
        self.structure.position(name).and_then(|i| self.values.get(i))
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
