// SPDX-License-Identifier: Apache-2.0

use vtl_diagnostic::{Error, Result};
use vtl_schema::{Component, DataStructure};

/// Parses a component schema from JSON: an array of
/// `{"name", "type", "role"}` objects. Unknown `type`/`role` tokens are
/// rejected by `serde`'s enum-tag matching before this function ever sees
/// them; any resulting `serde_json::Error` is mapped to
/// `Error::InvalidArgument`.
pub fn structure_from_json(json: &str) -> Result<DataStructure> {
    let components: Vec<Component> = serde_json::from_str(json)
        .map_err(|e| Error::invalid_argument(format!("invalid component JSON: {e}")))?;
    DataStructure::new(components)
}

/// Serializes a structure back to the same component JSON schema.
pub fn structure_to_json(structure: &DataStructure) -> Result<String> {
    serde_json::to_string(structure.components())
        .map_err(|e| Error::invalid_argument(format!("failed to serialize structure: {e}")))
}
