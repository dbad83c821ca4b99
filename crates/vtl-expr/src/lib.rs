// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use context::{Bindings, Context};
pub use resolvable::{ResolvableExpression, ScalarExpr};

mod context;
mod resolvable;

pub mod scalar;
