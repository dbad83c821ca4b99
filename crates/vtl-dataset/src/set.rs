// SPDX-License-Identifier: Apache-2.0

use crate::dataset::{Dataset, DatasetHandle, rows_equal};
use std::sync::Arc;
use vtl_diagnostic::{Error, Result};
use vtl_schema::{DataPoint, DataStructure};

/// Reprojects `row` (built against `from`'s component order) onto
/// `onto`'s component order by name, so set operators can compare and
/// concatenate operands whose structures are equal as a multiset but
/// ordered differently.
fn reorder(row: &DataPoint, from: &DataStructure, onto: &Arc<DataStructure>) -> Result<DataPoint> {
    let values = onto
        .components()
        .iter()
        .map(|c| {
            let pos = from.position(&c.name).expect("structures are equal as a multiset");
            row.values()[pos].clone()
        })
        .collect();
    DataPoint::new(onto.clone(), values)
}

/// Collects `dataset`'s rows reprojected onto `onto`'s component order, so a
/// right operand whose structure is equal to the left only as a multiset
/// (`DataStructure`'s `PartialEq`, see `data_structure.rs`) still compares
/// column-for-column by name rather than by position.
fn reorder_rows_onto(dataset: &DatasetHandle, onto: &Arc<DataStructure>) -> Result<Vec<DataPoint>> {
    let from = dataset.structure().clone();
    dataset.iter().map(|row| reorder(&row?, &from, onto)).collect()
}

fn require_identical_structures(left: &Arc<DataStructure>, right: &Arc<DataStructure>) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(Error::structure_mismatch(
            "set operator operands must have identical structures (same component names, types, and roles)",
        ))
    }
}

/// Concatenates rows from both operands. Operand structures
/// must be identical as a multiset; output rows follow the left operand's
/// component order.
#[derive(Debug)]
pub struct Union {
    left: DatasetHandle,
    right: DatasetHandle,
    structure: Arc<DataStructure>,
}

impl Union {
    pub fn new(left: DatasetHandle, right: DatasetHandle) -> Result<Self> {
        require_identical_structures(left.structure(), right.structure())?;
        let structure = left.structure().clone();
        Ok(Self { left, right, structure })
    }
}

impl Dataset for Union {
    fn structure(&self) -> &Arc<DataStructure> {
        &self.structure
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Result<DataPoint>> + '_> {
        let right_structure = self.right.structure().clone();
        let structure = self.structure.clone();
        Box::new(self.left.iter().chain(self.right.iter().map(move |row| {
            reorder(&row?, &right_structure, &structure)
        })))
    }
}

/// Removes from the left operand any row also present in the right
/// operand, by tuple equality under null-is-equal-to-null semantics.
#[derive(Debug)]
pub struct Difference {
    left: DatasetHandle,
    right: DatasetHandle,
}

impl Difference {
    pub fn new(left: DatasetHandle, right: DatasetHandle) -> Result<Self> {
        require_identical_structures(left.structure(), right.structure())?;
        Ok(Self { left, right })
    }
}

impl Dataset for Difference {
    fn structure(&self) -> &Arc<DataStructure> {
        self.left.structure()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Result<DataPoint>> + '_> {
        match reorder_rows_onto(&self.right, self.left.structure()) {
            Ok(right_rows) => Box::new(self.left.iter().filter_map(move |row| match row {
                Ok(row) => {
                    if right_rows.iter().any(|r| rows_equal(&row, r)) {
                        None
                    } else {
                        Some(Ok(row))
                    }
                }
                Err(e) => Some(Err(e)),
            })),
            Err(e) => Box::new(std::iter::once(Err(e))),
        }
    }
}

/// Keeps only rows present in both operands, by tuple equality under
/// null-is-equal-to-null semantics. Row order follows the
/// left operand; duplicate rows in the left operand that both match the
/// right side are each kept once per occurrence (standard multiset
/// intersection).
#[derive(Debug)]
pub struct Intersect {
    left: DatasetHandle,
    right: DatasetHandle,
}

impl Intersect {
    pub fn new(left: DatasetHandle, right: DatasetHandle) -> Result<Self> {
        require_identical_structures(left.structure(), right.structure())?;
        Ok(Self { left, right })
    }
}

impl Dataset for Intersect {
    fn structure(&self) -> &Arc<DataStructure> {
        self.left.structure()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Result<DataPoint>> + '_> {
        match reorder_rows_onto(&self.right, self.left.structure()) {
            Ok(right_rows) => Box::new(self.left.iter().filter_map(move |row| match row {
                Ok(row) => {
                    if right_rows.iter().any(|r| rows_equal(&row, r)) {
                        Some(Ok(row))
                    } else {
                        None
                    }
                }
                Err(e) => Some(Err(e)),
            })),
            Err(e) => Box::new(std::iter::once(Err(e))),
        }
    }
}
