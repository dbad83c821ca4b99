// SPDX-License-Identifier: Apache-2.0

use crate::Context;
use std::any::Any;
use std::fmt::Debug;
use vtl_diagnostic::Result;
use vtl_type::{Value, ValueType};

/// The single polymorphic contract every scalar operator node implements.
/// Construction validates operand types and raises
/// `UnsupportedType` before any resolution ever happens; `resolve` is then
/// infallible with respect to typing and only fails for runtime conditions
/// (e.g. an undefined identifier).
pub trait ResolvableExpression: Debug + Send + Sync + 'static {
    /// The declared result type. Resolving against any context either
    /// yields a value of this dynamic type or `Value::Null`.
    fn result_type(&self) -> ValueType;

    fn resolve(&self, ctx: &Context) -> Result<Value>;

    /// Supports downcasting a boxed node back to its concrete type, used by
    /// operators (e.g. `substr`'s argument-count error) that need to render
    /// a child expression's literal form for a diagnostic message. Every
    /// operator node is a plain owned struct, so the default body applies
    /// uniformly; no impl needs to override it.
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A boxed, owned scalar expression node. Sub-expressions are owned by
/// their parent: the tree is a DAG rooted at a statement's
/// right-hand side, not a shared, reference-counted graph.
pub type ScalarExpr = Box<dyn ResolvableExpression>;
