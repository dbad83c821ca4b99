// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use value::{Value, ValueType};
pub use widen::widen;

pub mod kleene;
mod value;
mod widen;

#[cfg(test)]
mod tests;
