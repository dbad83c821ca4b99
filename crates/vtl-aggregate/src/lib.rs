// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Statistical reducers: `count`, `sum`, `avg`, `median`,
//! `min`, `max`, `stddev_pop`, `stddev_samp`, `var_pop`, `var_samp`. Each
//! reducer is a four-part fold — `new_accumulator`, `accumulate`,
//! `combine`, `finish` — dispatched by a table keyed on the child
//! expression's scalar type, rather than branching on a type tag at
//! evaluation time.

pub use accumulator::Accumulator;
pub use reducer::{Reducer, ReducerKind, build};

mod accumulator;
mod reducer;

#[cfg(test)]
mod tests;
