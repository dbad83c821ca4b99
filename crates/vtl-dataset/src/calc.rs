// SPDX-License-Identifier: Apache-2.0

use crate::dataset::{Dataset, DatasetHandle};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use vtl_diagnostic::{Error, Result};
use vtl_expr::{Bindings, Context, ScalarExpr};
use vtl_schema::{Component, DataPoint, DataStructure, Role};

/// One new (or replacement) component produced by [`Calc`]: a name, a
/// scalar expression evaluated against the child's row, and a role.
#[derive(Debug)]
pub struct CalcComponent {
    pub name: String,
    pub expr: ScalarExpr,
    pub role: Role,
}

impl CalcComponent {
    pub fn new(name: impl Into<String>, expr: ScalarExpr, role: Role) -> Self {
        Self { name: name.into(), expr, role }
    }

    pub fn measure(name: impl Into<String>, expr: ScalarExpr) -> Self {
        Self::new(name, expr, Role::Measure)
    }
}

#[derive(Debug, Clone, Copy)]
enum OutputColumn {
    /// Carried over from the child unchanged, at this child position.
    Passthrough(usize),
    /// A new or replacing component, evaluated against the child's row.
    Computed(usize),
}

/// Defines new components, each a name, expression, and role. A name that collides with an existing component requires a
/// matching role and replaces the prior component in place; otherwise the
/// new component is appended.
#[derive(Debug)]
pub struct Calc {
    child: DatasetHandle,
    structure: Arc<DataStructure>,
    columns: Vec<OutputColumn>,
    computed: Vec<CalcComponent>,
    bindings: Arc<dyn Bindings + Send + Sync>,
}

impl Calc {
    pub fn new(
        child: DatasetHandle,
        computed: Vec<CalcComponent>,
        bindings: Arc<dyn Bindings + Send + Sync>,
    ) -> Result<Self> {
        let source = child.structure();

        let mut computed_by_name = HashMap::new();
        for (i, c) in computed.iter().enumerate() {
            if computed_by_name.insert(c.name.as_str(), i).is_some() {
                return Err(Error::invalid_argument(format!(
                    "calc defines {} more than once",
                    c.name
                )));
            }
        }

        let mut columns = Vec::new();
        let mut components = Vec::new();
        let mut replaced = HashSet::new();

        for (i, component) in source.components().iter().enumerate() {
            if let Some(&ci) = computed_by_name.get(component.name.as_str()) {
                let calc = &computed[ci];
                if calc.role != component.role {
                    return Err(Error::invalid_argument(format!(
                        "calc component {} replaces an existing component of role {} with role {}",
                        calc.name, component.role, calc.role
                    )));
                }
                components.push(Component::new(calc.name.clone(), calc.expr.result_type(), calc.role));
                columns.push(OutputColumn::Computed(ci));
                replaced.insert(calc.name.as_str());
            } else {
                components.push(component.clone());
                columns.push(OutputColumn::Passthrough(i));
            }
        }

        for (i, calc) in computed.iter().enumerate() {
            if replaced.contains(calc.name.as_str()) {
                continue;
            }
            components.push(Component::new(calc.name.clone(), calc.expr.result_type(), calc.role));
            columns.push(OutputColumn::Computed(i));
        }

        let structure = Arc::new(DataStructure::new(components)?);
        Ok(Self { child, structure, columns, computed, bindings })
    }

    fn compute_row(&self, row: DataPoint) -> Result<DataPoint> {
        let ctx = Context::row(self.bindings.as_ref(), &row);
        let mut values = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let value = match column {
                OutputColumn::Passthrough(i) => row.values()[*i].clone(),
                OutputColumn::Computed(i) => self.computed[*i].expr.resolve(&ctx)?,
            };
            values.push(value);
        }
        DataPoint::new(self.structure.clone(), values)
    }
}

impl Dataset for Calc {
    fn structure(&self) -> &Arc<DataStructure> {
        &self.structure
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Result<DataPoint>> + '_> {
        Box::new(self.child.iter().map(move |row| self.compute_row(row?)))
    }
}
