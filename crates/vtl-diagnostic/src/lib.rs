// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::{Error, Result};
pub use span::Span;

mod error;
mod span;
