// SPDX-License-Identifier: Apache-2.0

use crate::{Component, Role};
use std::collections::HashSet;
use vtl_diagnostic::{Error, Result};

/// An ordered sequence of [`Component`]s. Equality is by
/// multiset of `(name, type, role)`, not position, since two structures
/// built via different operator pipelines may list components in different
/// orders yet describe the same schema.
#[derive(Clone, Debug)]
pub struct DataStructure {
    components: Vec<Component>,
}

impl DataStructure {
    pub fn new(components: Vec<Component>) -> Result<Self> {
        let mut seen = HashSet::new();
        for c in &components {
            if !seen.insert(c.name.as_str()) {
                return Err(Error::invalid_argument(format!(
                    "duplicate component name: {}",
                    c.name
                )));
            }
        }
        Ok(Self { components })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.components.iter().position(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.role == Role::Identifier)
    }

    pub fn measures(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.role == Role::Measure)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.role == Role::Attribute)
    }

    pub fn has_identifier(&self) -> bool {
        self.identifiers().next().is_some()
    }

    /// Asserts the join participation invariant: at least one
    /// identifier must exist.
    pub fn require_joinable(&self) -> Result<()> {
        if self.has_identifier() {
            Ok(())
        } else {
            Err(Error::invalid_argument(
                "a dataset without any identifier component cannot participate in a join",
            ))
        }
    }

    fn as_multiset(&self) -> Vec<(&str, vtl_type::ValueType, Role)> {
        let mut set: Vec<_> =
            self.components.iter().map(|c| (c.name.as_str(), c.value_type, c.role)).collect();
        set.sort_by(|a, b| a.0.cmp(b.0));
        set
    }
}

impl PartialEq for DataStructure {
    fn eq(&self, other: &Self) -> bool {
        self.as_multiset() == other.as_multiset()
    }
}

impl Eq for DataStructure {}
