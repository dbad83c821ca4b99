// SPDX-License-Identifier: Apache-2.0

//! Test-only helper constructors: small builders that save
//! every test from re-deriving the same scaffolding by hand.

use std::sync::Arc;
use vtl_dataset::{Dataset, InMemoryDataset};
use vtl_schema::{Component, DataPoint, DataStructure, Role};
use vtl_type::{Value, ValueType};

pub fn structure(components: &[(&str, ValueType, Role)]) -> Arc<DataStructure> {
    Arc::new(
        DataStructure::new(
            components.iter().map(|(n, t, r)| Component::new(*n, *t, *r)).collect(),
        )
        .expect("test structure is well-formed"),
    )
}

pub fn point(structure: &Arc<DataStructure>, values: Vec<Value>) -> DataPoint {
    DataPoint::new(structure.clone(), values).expect("test row matches structure arity")
}

pub fn in_memory(structure: Arc<DataStructure>, rows: Vec<DataPoint>) -> Arc<dyn Dataset> {
    Arc::new(InMemoryDataset::new(structure, rows))
}

pub fn id(name: &str) -> (&str, ValueType, Role) {
    (name, ValueType::Integer, Role::Identifier)
}

pub fn measure(name: &str, value_type: ValueType) -> (&str, ValueType, Role) {
    (name, value_type, Role::Measure)
}
