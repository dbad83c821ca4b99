// SPDX-License-Identifier: Apache-2.0

use crate::dataset::{Dataset, DatasetHandle};
use std::sync::Arc;
use vtl_diagnostic::{Error, Result};
use vtl_expr::{Bindings, Context, ScalarExpr};
use vtl_schema::{DataPoint, DataStructure};
use vtl_type::{Value, ValueType};

/// A boolean scalar expression over a data point. Rows
/// where the expression resolves to null are discarded along with rows
/// resolving to `false`, matching SQL `WHERE` semantics — a null condition
/// is "unknown", not "true".
#[derive(Debug)]
pub struct Filter {
    child: DatasetHandle,
    predicate: ScalarExpr,
    bindings: Arc<dyn Bindings + Send + Sync>,
}

impl Filter {
    pub fn new(
        child: DatasetHandle,
        predicate: ScalarExpr,
        bindings: Arc<dyn Bindings + Send + Sync>,
    ) -> Result<Self> {
        if predicate.result_type() != ValueType::Boolean {
            return Err(Error::unsupported_type(format!(
                "filter predicate must be boolean, found {}",
                predicate.result_type()
            )));
        }
        Ok(Self { child, predicate, bindings })
    }

    fn keep(&self, row: &DataPoint) -> Result<bool> {
        let ctx = Context::row(self.bindings.as_ref(), row);
        Ok(matches!(self.predicate.resolve(&ctx)?, Value::Boolean(true)))
    }
}

impl Dataset for Filter {
    fn structure(&self) -> &Arc<DataStructure> {
        self.child.structure()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Result<DataPoint>> + '_> {
        Box::new(self.child.iter().filter_map(move |row| match row {
            Ok(row) => match self.keep(&row) {
                Ok(true) => Some(Ok(row)),
                Ok(false) => None,
                Err(e) => Some(Err(e)),
            },
            Err(e) => Some(Err(e)),
        }))
    }
}
