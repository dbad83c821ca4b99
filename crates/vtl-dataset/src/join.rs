// SPDX-License-Identifier: Apache-2.0

use crate::dataset::{Dataset, DatasetHandle, ValueKey};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use vtl_diagnostic::{Error, Result};
use vtl_schema::{Component, DataPoint, DataStructure};
use vtl_type::Value;

/// Inner, left, or full outer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Full,
}

/// Which side a disambiguating rename in [`Join::new`]'s `renames` map
/// applies to, keyed by `(side, original_name)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Joins two datasets on their shared identifier components. The shared identifier set must be non-empty. Non-identifier
/// components that collide by name between the two inputs must be
/// disambiguated via `renames` or construction is rejected.
#[derive(Debug)]
pub struct Join {
    left: DatasetHandle,
    right: DatasetHandle,
    kind: JoinKind,
    structure: Arc<DataStructure>,
    shared_identifier_positions: (Vec<usize>, Vec<usize>),
    left_other_positions: Vec<usize>,
    right_other_positions: Vec<usize>,
}

impl Join {
    pub fn new(
        left: DatasetHandle,
        right: DatasetHandle,
        kind: JoinKind,
        renames: &HashMap<(Side, String), String>,
    ) -> Result<Self> {
        left.structure().require_joinable()?;
        right.structure().require_joinable()?;

        let left_ids: HashSet<&str> =
            left.structure().identifiers().map(|c| c.name.as_str()).collect();
        let right_ids: HashSet<&str> =
            right.structure().identifiers().map(|c| c.name.as_str()).collect();
        let mut shared: Vec<&str> = left_ids.intersection(&right_ids).copied().collect();
        shared.sort_unstable();
        if shared.is_empty() {
            return Err(Error::invalid_argument(
                "join requires a non-empty shared identifier set between its operands",
            ));
        }

        let resolve_name = |side: Side, name: &str| -> String {
            renames.get(&(side, name.to_string())).cloned().unwrap_or_else(|| name.to_string())
        };

        let mut components = Vec::new();
        let mut seen = HashSet::new();
        for name in &shared {
            let component = left.structure().get(name).expect("shared identifier exists on left");
            components.push(component.clone());
            seen.insert(component.name.clone());
        }

        let mut left_other_positions = Vec::new();
        for (i, component) in left.structure().components().iter().enumerate() {
            if shared.contains(&component.name.as_str()) {
                continue;
            }
            let name = resolve_name(Side::Left, &component.name);
            if !seen.insert(name.clone()) {
                return Err(Error::invalid_argument(format!(
                    "join component name collision on {name}; disambiguate with a rename"
                )));
            }
            components.push(Component::new(name, component.value_type, component.role));
            left_other_positions.push(i);
        }

        let mut right_other_positions = Vec::new();
        for (i, component) in right.structure().components().iter().enumerate() {
            if shared.contains(&component.name.as_str()) {
                continue;
            }
            let name = resolve_name(Side::Right, &component.name);
            if !seen.insert(name.clone()) {
                return Err(Error::invalid_argument(format!(
                    "join component name collision on {name}; disambiguate with a rename"
                )));
            }
            components.push(Component::new(name, component.value_type, component.role));
            right_other_positions.push(i);
        }

        let left_shared_positions: Vec<usize> = shared
            .iter()
            .map(|name| left.structure().position(name).expect("shared identifier exists"))
            .collect();
        let right_shared_positions: Vec<usize> = shared
            .iter()
            .map(|name| right.structure().position(name).expect("shared identifier exists"))
            .collect();

        let structure = Arc::new(DataStructure::new(components)?);
        Ok(Self {
            left,
            right,
            kind,
            structure,
            shared_identifier_positions: (left_shared_positions, right_shared_positions),
            left_other_positions,
            right_other_positions,
        })
    }

    fn key_of(values: &[Value], positions: &[usize]) -> ValueKey {
        ValueKey(positions.iter().map(|&i| values[i].clone()).collect())
    }

    /// Builds one merged row. `shared` carries the identifier values taken
    /// from whichever side is present (left and right agree there by
    /// construction); `left_other`/`right_other` are `None` only for the
    /// unmatched side of an outer join, which contributes nulls instead.
    fn merge_row(
        &self,
        shared: &[Value],
        left_other: Option<&[Value]>,
        right_other: Option<&[Value]>,
    ) -> Result<DataPoint> {
        let mut values = Vec::with_capacity(self.structure.len());
        values.extend_from_slice(shared);
        match left_other {
            Some(v) => values.extend(self.left_other_positions.iter().map(|&i| v[i].clone())),
            None => values.extend(std::iter::repeat_n(Value::Null, self.left_other_positions.len())),
        }
        match right_other {
            Some(v) => values.extend(self.right_other_positions.iter().map(|&i| v[i].clone())),
            None => values.extend(std::iter::repeat_n(Value::Null, self.right_other_positions.len())),
        }
        DataPoint::new(self.structure.clone(), values)
    }

    fn compute_rows(&self) -> Result<Vec<DataPoint>> {
        let left_rows = self.left.collect_rows()?;
        let right_rows = self.right.collect_rows()?;

        let mut right_by_key: HashMap<ValueKey, Vec<usize>> = HashMap::new();
        for (i, row) in right_rows.iter().enumerate() {
            let key = Self::key_of(row.values(), &self.shared_identifier_positions.1);
            right_by_key.entry(key).or_default().push(i);
        }
        let mut right_matched = vec![false; right_rows.len()];

        let mut out = Vec::new();
        for left_row in &left_rows {
            let key_values: Vec<Value> = self
                .shared_identifier_positions
                .0
                .iter()
                .map(|&i| left_row.values()[i].clone())
                .collect();
            let key = ValueKey(key_values.clone());
            match right_by_key.get(&key) {
                Some(indices) => {
                    for &i in indices {
                        right_matched[i] = true;
                        out.push(self.merge_row(
                            &key_values,
                            Some(left_row.values()),
                            Some(right_rows[i].values()),
                        )?);
                    }
                }
                None if self.kind == JoinKind::Left || self.kind == JoinKind::Full => {
                    out.push(self.merge_row(&key_values, Some(left_row.values()), None)?);
                }
                None => {}
            }
        }

        if self.kind == JoinKind::Full {
            for (i, row) in right_rows.iter().enumerate() {
                if !right_matched[i] {
                    let key_values: Vec<Value> = self
                        .shared_identifier_positions
                        .1
                        .iter()
                        .map(|&j| row.values()[j].clone())
                        .collect();
                    out.push(self.merge_row(&key_values, None, Some(row.values()))?);
                }
            }
        }

        Ok(out)
    }
}

impl Dataset for Join {
    fn structure(&self) -> &Arc<DataStructure> {
        &self.structure
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Result<DataPoint>> + '_> {
        match self.compute_rows() {
            Ok(rows) => Box::new(rows.into_iter().map(Ok)),
            Err(e) => Box::new(std::iter::once(Err(e))),
        }
    }
}
