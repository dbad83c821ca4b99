// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! The evaluator and binding environment: ties a parsed
//! expression tree (scalar or dataset) to execution against an
//! [`Environment`], the single mutable resource a script execution owns.

pub use config::EvaluatorConfig;
pub use environment::{BoundValue, Environment};
pub use evaluator::Evaluator;
pub use statement::{Statement, StatementExpr};

mod config;
mod environment;
mod evaluator;
mod statement;

#[cfg(test)]
mod tests;

#[cfg(test)]
pub mod test_utils;
