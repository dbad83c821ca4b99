// SPDX-License-Identifier: Apache-2.0

use crate::dataset::{Dataset, DatasetHandle};
use std::sync::Arc;
use vtl_diagnostic::{Error, Result};
use vtl_schema::{DataPoint, DataStructure};

/// `keep`/`drop` projection: the new structure is the subset
/// of components named, or its complement. Identifiers may not be dropped
/// from the resulting structure either way.
#[derive(Debug, Clone)]
pub struct Project {
    child: DatasetHandle,
    structure: Arc<DataStructure>,
    positions: Vec<usize>,
}

impl Project {
    pub fn keep(child: DatasetHandle, names: &[String]) -> Result<Self> {
        Self::build(child, names, true)
    }

    pub fn drop(child: DatasetHandle, names: &[String]) -> Result<Self> {
        Self::build(child, names, false)
    }

    fn build(child: DatasetHandle, names: &[String], keep: bool) -> Result<Self> {
        let source = child.structure();
        for name in names {
            if !source.contains(name) {
                return Err(Error::invalid_argument(format!(
                    "no such component: {name}"
                )));
            }
        }
        let named: std::collections::HashSet<&str> = names.iter().map(String::as_str).collect();

        for component in source.identifiers() {
            let dropped = if keep { !named.contains(component.name.as_str()) } else { named.contains(component.name.as_str()) };
            if dropped {
                return Err(Error::invalid_argument(format!(
                    "identifier component {} may not be dropped",
                    component.name
                )));
            }
        }

        let mut positions = Vec::new();
        let mut components = Vec::new();
        for (i, component) in source.components().iter().enumerate() {
            let retained = if keep {
                named.contains(component.name.as_str())
            } else {
                !named.contains(component.name.as_str())
            };
            if retained {
                positions.push(i);
                components.push(component.clone());
            }
        }
        let structure = Arc::new(DataStructure::new(components)?);
        Ok(Self { child, structure, positions })
    }

    fn project_row(&self, row: DataPoint) -> Result<DataPoint> {
        let values = self.positions.iter().map(|&i| row.values()[i].clone()).collect();
        DataPoint::new(self.structure.clone(), values)
    }
}

impl Dataset for Project {
    fn structure(&self) -> &Arc<DataStructure> {
        &self.structure
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Result<DataPoint>> + '_> {
        Box::new(self.child.iter().map(move |row| self.project_row(row?)))
    }
}

