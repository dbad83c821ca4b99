// SPDX-License-Identifier: Apache-2.0

use crate::{BoundValue, Environment, EvaluatorConfig, Statement, StatementExpr};
use vtl_dataset::DatasetHandle;
use vtl_diagnostic::{Error, Result};
use vtl_expr::Context;

/// Walks a [`Statement`]'s expression tree against an [`Environment`],
/// binding the result back into it. Single-threaded and synchronous: one
/// `Evaluator` drives one script execution over one `Environment`, never
/// concurrently.
#[derive(Debug, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> EvaluatorConfig {
        self.config
    }

    /// Executes one statement: resolve against the environment, bind the
    /// result under `statement.target`, and return it. Errors abort the
    /// statement and leave `env` untouched — the binding is only written
    /// after resolution succeeds.
    #[tracing::instrument(level = "debug", skip(self, env, statement), fields(target = %statement.target))]
    pub fn execute(&self, env: &mut Environment, statement: Statement) -> Result<BoundValue> {
        let bound = match statement.expr {
            StatementExpr::Scalar(expr) => {
                let ctx = Context::empty(&*env);
                let value = expr.resolve(&ctx)?;
                BoundValue::Scalar(value)
            }
            StatementExpr::Dataset(dataset) => BoundValue::Dataset(dataset),
        };
        env.bind(statement.target, bound.clone());
        Ok(bound)
    }

    /// Drives a dataset's row stream to completion without exposing any
    /// row. Per
    /// `self.config().fail_fast`, aborts at the first row error or keeps
    /// scanning and reports every error found in one combined message.
    #[tracing::instrument(level = "trace", skip(self, dataset))]
    pub fn validate(&self, dataset: &DatasetHandle) -> Result<()> {
        let mut errors = Vec::new();
        for row in dataset.iter() {
            if let Err(e) = row {
                if self.config.fail_fast {
                    return Err(e);
                }
                errors.push(e.to_string());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::invalid_argument(errors.join("; ")))
        }
    }
}
