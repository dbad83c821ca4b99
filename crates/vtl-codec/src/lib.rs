// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! The structure-boundary collaborators: these are
//! explicitly *not* core — they translate between the wire/file world and
//! `vtl-schema`'s `DataStructure`/`DataPoint`. SDMX-ML ingestion is not
//! implemented here; only the plug-in point ([`StructureSource`]) lives
//! here.

pub use csv_source::datapoints_from_csv;
pub use json_structure::{structure_from_json, structure_to_json};
pub use structure_source::StructureSource;

mod csv_source;
mod json_structure;
mod structure_source;

#[cfg(test)]
mod tests;
