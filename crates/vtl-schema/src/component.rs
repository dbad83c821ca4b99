// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use vtl_type::ValueType;

/// The three component roles: identifiers jointly key a data
/// point, measures carry observations, attributes carry metadata.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Identifier,
    Measure,
    Attribute,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Identifier => f.write_str("IDENTIFIER"),
            Role::Measure => f.write_str("MEASURE"),
            Role::Attribute => f.write_str("ATTRIBUTE"),
        }
    }
}

/// A named, typed column descriptor with a role. Names are
/// unique within a [`crate::DataStructure`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub role: Role,
}

impl Component {
    pub fn new(name: impl Into<String>, value_type: ValueType, role: Role) -> Self {
        Self { name: name.into(), value_type, role }
    }

    pub fn identifier(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, value_type, Role::Identifier)
    }

    pub fn measure(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, value_type, Role::Measure)
    }

    pub fn attribute(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, value_type, Role::Attribute)
    }
}
