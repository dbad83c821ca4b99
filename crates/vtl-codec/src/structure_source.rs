// SPDX-License-Identifier: Apache-2.0

use vtl_diagnostic::Result;
use vtl_schema::DataStructure;

/// Plug-in point for SDMX-ML 3.0 structure ingestion: reads a structure
/// definition identified by a URN or file path and yields a
/// `DataStructure`. Parsing a real SDMX-ML document is an external
/// utility's job; `vtl-codec` ships no implementation, and a host embeds
/// one behind this trait.
///
/// Non-goal: no SDMX-ML parser is implemented here.
pub trait StructureSource {
    fn load(&self, locator: &str) -> Result<DataStructure>;
}
