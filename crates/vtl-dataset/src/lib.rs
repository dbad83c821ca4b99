// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! The dataset algebra: relational-style operators over a
//! schema-carrying [`Dataset`] abstraction — projection, rename, filter,
//! calc, join, aggregate, union, and the set operators. Every operator
//! owns its child by [`DatasetHandle`] and derives a new structure without
//! mutating its input.

pub use aggregate::{Aggregate, AggregateMeasure};
pub use calc::{Calc, CalcComponent};
pub use dataset::{Dataset, DatasetHandle, InMemoryDataset, row_values_equal, rows_equal};
pub use filter::Filter;
pub use join::{Join, JoinKind};
pub use project::Project;
pub use rename::Rename;
pub use set::{Difference, Intersect, Union};

mod aggregate;
mod calc;
mod dataset;
mod filter;
mod join;
mod project;
mod rename;
mod set;
