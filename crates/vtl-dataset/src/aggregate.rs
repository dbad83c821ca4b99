// SPDX-License-Identifier: Apache-2.0

use crate::dataset::{Dataset, DatasetHandle, ValueKey};
use std::collections::HashMap;
use std::sync::Arc;
use vtl_aggregate::{Accumulator, Reducer, ReducerKind};
use vtl_diagnostic::{Error, Result};
use vtl_expr::{Bindings, Context, ScalarExpr};
use vtl_schema::{Component, DataPoint, DataStructure, Role};

/// One aggregated measure: a name, the reducer to apply, and the child
/// expression to feed it (`None` only for `count`, which takes no
/// expression).
pub struct AggregateMeasure {
    pub name: String,
    pub reducer_kind: ReducerKind,
    pub expr: Option<ScalarExpr>,
}

impl AggregateMeasure {
    pub fn new(name: impl Into<String>, reducer_kind: ReducerKind, expr: Option<ScalarExpr>) -> Self {
        Self { name: name.into(), reducer_kind, expr }
    }
}

impl std::fmt::Debug for AggregateMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregateMeasure")
            .field("name", &self.name)
            .field("reducer_kind", &self.reducer_kind)
            .finish()
    }
}

/// Groups by a subset of identifiers and computes named measures via
/// aggregation reducers over child expressions. The output
/// structure is the grouping identifiers followed by the aggregated
/// measures.
#[derive(Debug)]
pub struct Aggregate {
    child: DatasetHandle,
    structure: Arc<DataStructure>,
    group_positions: Vec<usize>,
    measures: Vec<AggregateMeasure>,
    reducers: Vec<Box<dyn Reducer>>,
    bindings: Arc<dyn Bindings + Send + Sync>,
}

impl Aggregate {
    pub fn new(
        child: DatasetHandle,
        group_by: &[String],
        measures: Vec<AggregateMeasure>,
        bindings: Arc<dyn Bindings + Send + Sync>,
    ) -> Result<Self> {
        let source = child.structure();
        let mut group_positions = Vec::with_capacity(group_by.len());
        let mut components = Vec::new();
        for name in group_by {
            let component = source
                .get(name)
                .ok_or_else(|| Error::invalid_argument(format!("no such component: {name}")))?;
            if component.role != Role::Identifier {
                return Err(Error::invalid_argument(format!(
                    "aggregate may only group by identifiers, {name} is {}",
                    component.role
                )));
            }
            group_positions.push(source.position(name).expect("component exists"));
            components.push(component.clone());
        }

        let mut reducers = Vec::with_capacity(measures.len());
        for measure in &measures {
            let input_type = measure.expr.as_ref().map(|e| e.result_type());
            let reducer = vtl_aggregate::build(measure.reducer_kind, input_type)?;
            components.push(Component::measure(measure.name.clone(), reducer.result_type()));
            reducers.push(reducer);
        }

        let structure = Arc::new(DataStructure::new(components)?);
        Ok(Self { child, structure, group_positions, measures, reducers, bindings })
    }

    fn group_key(&self, row: &DataPoint) -> ValueKey {
        ValueKey(self.group_positions.iter().map(|&i| row.values()[i].clone()).collect())
    }

    fn compute_rows(&self) -> Result<Vec<DataPoint>> {
        let mut groups: HashMap<ValueKey, Vec<Box<dyn Accumulator>>> = HashMap::new();
        let mut group_order: Vec<ValueKey> = Vec::new();

        for row in self.child.iter() {
            let row = row?;
            let key = self.group_key(&row);
            let accumulators = groups.entry(key.clone()).or_insert_with(|| {
                group_order.push(key.clone());
                self.reducers.iter().map(|r| r.new_accumulator()).collect()
            });

            let ctx = Context::row(self.bindings.as_ref(), &row);
            for (acc, measure) in accumulators.iter_mut().zip(&self.measures) {
                match &measure.expr {
                    Some(expr) => acc.accumulate(&expr.resolve(&ctx)?),
                    None => acc.accumulate(&vtl_type::Value::Null),
                }
            }
        }

        let mut out = Vec::with_capacity(group_order.len());
        for key in group_order {
            let accumulators = groups.remove(&key).expect("group was just inserted");
            let mut values = key.0;
            values.extend(accumulators.iter().map(|a| a.finish()));
            out.push(DataPoint::new(self.structure.clone(), values)?);
        }
        Ok(out)
    }
}

impl Dataset for Aggregate {
    fn structure(&self) -> &Arc<DataStructure> {
        &self.structure
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Result<DataPoint>> + '_> {
        match self.compute_rows() {
            Ok(rows) => Box::new(rows.into_iter().map(Ok)),
            Err(e) => Box::new(std::iter::once(Err(e))),
        }
    }
}
