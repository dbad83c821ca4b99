// SPDX-License-Identifier: Apache-2.0

use crate::dataset::{Dataset, DatasetHandle};
use std::collections::HashMap;
use std::sync::Arc;
use vtl_diagnostic::{Error, Result};
use vtl_schema::{Component, DataPoint, DataStructure};

/// A partial mapping from old to new component names.
/// Collisions between a renamed component and an existing (non-renamed)
/// name are rejected at construction time; row data is untouched, only the
/// structure changes, so `iter` is a thin schema swap over the child rows.
#[derive(Debug, Clone)]
pub struct Rename {
    child: DatasetHandle,
    structure: Arc<DataStructure>,
}

impl Rename {
    pub fn new(child: DatasetHandle, mapping: &HashMap<String, String>) -> Result<Self> {
        let source = child.structure();
        for old_name in mapping.keys() {
            if !source.contains(old_name) {
                return Err(Error::invalid_argument(format!("no such component: {old_name}")));
            }
        }

        let mut components = Vec::with_capacity(source.len());
        for component in source.components() {
            let name = mapping.get(&component.name).cloned().unwrap_or_else(|| component.name.clone());
            components.push(Component::new(name, component.value_type, component.role));
        }

        let mut seen = std::collections::HashSet::new();
        for component in &components {
            if !seen.insert(component.name.as_str()) {
                return Err(Error::invalid_argument(format!(
                    "rename collides with an existing component name: {}",
                    component.name
                )));
            }
        }

        let structure = Arc::new(DataStructure::new(components)?);
        Ok(Self { child, structure })
    }

    fn rename_row(&self, row: DataPoint) -> Result<DataPoint> {
        DataPoint::new(self.structure.clone(), row.into_values())
    }
}

impl Dataset for Rename {
    fn structure(&self) -> &Arc<DataStructure> {
        &self.structure
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Result<DataPoint>> + '_> {
        Box::new(self.child.iter().map(move |row| self.rename_row(row?)))
    }
}
