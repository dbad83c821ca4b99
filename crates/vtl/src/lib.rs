// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! A VTL (Validation and Transformation Language) execution engine
//!: given an already-parsed, type-checked expression tree and
//! a binding environment, evaluates scalar expressions and dataset
//! pipelines and returns their values.
//!
//! This crate is a facade: it re-exports the public surface of the
//! workspace's leaf crates so a host embeds one dependency. Parsing
//! source text into the expression types below, and registering this
//! engine with a scripting host, are both out of scope — a
//! caller builds the tree directly using the constructors in [`expr`] and
//! [`dataset`].

pub use vtl_diagnostic::{Error, Result, Span};
pub use vtl_type::{Value, ValueType, kleene, widen};

pub use vtl_schema::{Component, DataPoint, DataStructure, Role};

pub use vtl_engine::{BoundValue, Environment, Evaluator, EvaluatorConfig, Statement, StatementExpr};

/// The typed scalar expression tree and its operators.
pub mod expr {
    pub use vtl_expr::scalar;
    pub use vtl_expr::{Bindings, Context, ResolvableExpression, ScalarExpr};
}

/// The statistical reducers.
pub mod aggregate {
    pub use vtl_aggregate::{Accumulator, Reducer, ReducerKind, build};
}

/// The dataset algebra.
pub mod dataset {
    pub use vtl_dataset::{
        Aggregate, AggregateMeasure, Calc, CalcComponent, Dataset, DatasetHandle, Difference,
        Filter, InMemoryDataset, Intersect, Join, JoinKind, Project, Rename, Union,
        row_values_equal, rows_equal,
    };
}

/// The structure-boundary collaborators: JSON/CSV codecs and
/// the SDMX-ML plug-in point. Not core, specified only at the boundary.
pub mod codec {
    pub use vtl_codec::{StructureSource, datapoints_from_csv, structure_from_json, structure_to_json};
}
