// SPDX-License-Identifier: Apache-2.0

use vtl_dataset::DatasetHandle;
use vtl_expr::ScalarExpr;

/// The right-hand side of a [`Statement`]: either a scalar expression
/// resolved against an empty context, or an already-constructed dataset
/// pipeline whose materialization stays deferred until a consumer iterates
/// it.
#[derive(Debug)]
pub enum StatementExpr {
    Scalar(ScalarExpr),
    Dataset(DatasetHandle),
}

/// Binds `target` to the result of `expr`. The parser is
/// responsible for producing a fully type-checked `expr`; the evaluator's
/// job is purely to resolve it and record the binding.
#[derive(Debug)]
pub struct Statement {
    pub target: String,
    pub expr: StatementExpr,
}

impl Statement {
    pub fn scalar(target: impl Into<String>, expr: ScalarExpr) -> Self {
        Self { target: target.into(), expr: StatementExpr::Scalar(expr) }
    }

    pub fn dataset(target: impl Into<String>, dataset: DatasetHandle) -> Self {
        Self { target: target.into(), expr: StatementExpr::Dataset(dataset) }
    }
}
