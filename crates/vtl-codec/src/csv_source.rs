// SPDX-License-Identifier: Apache-2.0

use std::io::Read;
use std::sync::Arc;
use vtl_diagnostic::{Error, Result, Span};
use vtl_schema::{DataPoint, DataStructure};
use vtl_type::{Value, ValueType};

/// CSV dataset ingestion: rows are parsed positionally
/// against `structure`'s component order. No header row — callers that
/// have one should skip it before handing the reader here, the same way
/// the `csv` crate leaves header handling to its caller when
/// `has_headers(false)` is set. Type coercion follows each component's
/// declared type; empty fields become `Value::Null`. A row whose arity or
/// field contents don't match the structure raises
/// `Error::InvalidArgument` with a `Span` synthesized from the record's
/// line number.
pub fn datapoints_from_csv<R: Read>(
    structure: Arc<DataStructure>,
    reader: R,
) -> Result<Vec<DataPoint>> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(false).from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record
            .map_err(|e| Error::invalid_argument(format!("malformed CSV record: {e}")))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0) as u32;
        let span = Span::new(line, line);

        if record.len() != structure.len() {
            return Err(Error::invalid_argument(format!(
                "CSV record has {} fields but structure declares {} components",
                record.len(),
                structure.len()
            ))
            .with_span(span));
        }

        let mut values = Vec::with_capacity(record.len());
        for (field, component) in record.iter().zip(structure.components()) {
            let value = coerce(field, component.value_type).map_err(|e| e.with_span(span))?;
            values.push(value);
        }
        rows.push(DataPoint::new(structure.clone(), values)?);
    }

    tracing::debug!(rows = rows.len(), "parsed CSV dataset");
    Ok(rows)
}

fn coerce(field: &str, value_type: ValueType) -> Result<Value> {
    if field.is_empty() {
        return Ok(Value::Null);
    }
    match value_type {
        ValueType::Integer => field
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| Error::invalid_argument(format!("cannot parse '{field}' as INTEGER"))),
        ValueType::Number => field
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| Error::invalid_argument(format!("cannot parse '{field}' as NUMBER"))),
        ValueType::String => Ok(Value::String(field.to_string())),
        ValueType::Boolean => field
            .parse::<bool>()
            .map(Value::Boolean)
            .map_err(|_| Error::invalid_argument(format!("cannot parse '{field}' as BOOLEAN"))),
    }
}
