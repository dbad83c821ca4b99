// SPDX-License-Identifier: Apache-2.0

use std::fmt::Debug;
use std::sync::Arc;
use vtl_diagnostic::Result;
use vtl_schema::{DataPoint, DataStructure};
use vtl_type::Value;

/// A schema plus a lazy, restartable row stream. Every
/// call to [`Dataset::iter`] must produce an independent stream — two
/// concurrent iterations never share position.
pub trait Dataset: Debug + Send + Sync {
    fn structure(&self) -> &Arc<DataStructure>;

    fn iter(&self) -> Box<dyn Iterator<Item = Result<DataPoint>> + '_>;

    /// Materializes the stream; convenience for operators and tests that
    /// need the full row set rather than a lazy walk.
    fn collect_rows(&self) -> Result<Vec<DataPoint>> {
        self.iter().collect()
    }
}

/// A handle to a dataset-producing node. Operators own their child by this
/// handle rather than a raw reference so a pipeline can be built bottom-up
/// and shared read-only.
pub type DatasetHandle = Arc<dyn Dataset>;

/// A materialized dataset: all rows held in memory. This is both the leaf
/// node every pipeline bottoms out at (the parser hands the evaluator an
/// already-bound dataset value) and the type dataset operators return when
/// eagerly evaluated rather than composed lazily over their child.
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    structure: Arc<DataStructure>,
    rows: Arc<Vec<DataPoint>>,
}

impl InMemoryDataset {
    pub fn new(structure: Arc<DataStructure>, rows: Vec<DataPoint>) -> Self {
        Self { structure, rows: Arc::new(rows) }
    }
}

impl Dataset for InMemoryDataset {
    fn structure(&self) -> &Arc<DataStructure> {
        &self.structure
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Result<DataPoint>> + '_> {
        Box::new(self.rows.iter().cloned().map(Ok))
    }
}

/// Value equality under null-is-equal-to-null semantics. This differs from the scalar `=`
/// operator (§4.3), which propagates null rather than testing it.
pub fn row_values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        _ => false,
    }
}

pub fn rows_equal(a: &DataPoint, b: &DataPoint) -> bool {
    a.values().len() == b.values().len()
        && a.values().iter().zip(b.values()).all(|(x, y)| row_values_equal(x, y))
}

/// A hashable tuple of values, used to key groups in [`crate::Aggregate`]
/// and hash-join buckets in [`crate::Join`]. `Eq`/`Hash` agree with
/// [`row_values_equal`]'s null-is-equal-to-null semantics, not the scalar
/// `=` operator's null-propagating one.
#[derive(Clone, Debug)]
pub struct ValueKey(pub Vec<Value>);

impl PartialEq for ValueKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(&other.0).all(|(a, b)| row_values_equal(a, b))
    }
}

impl Eq for ValueKey {}

impl std::hash::Hash for ValueKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for v in &self.0 {
            match v {
                Value::Integer(i) => {
                    0u8.hash(state);
                    i.hash(state);
                }
                Value::Number(n) => {
                    1u8.hash(state);
                    n.to_bits().hash(state);
                }
                Value::String(s) => {
                    2u8.hash(state);
                    s.hash(state);
                }
                Value::Boolean(b) => {
                    3u8.hash(state);
                    b.hash(state);
                }
                Value::Null => 4u8.hash(state),
            }
        }
    }
}
