//! JSON decoding helpers.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::model::{DataRow, TabularRecord};

/// Decode tabular rows from JSON.
///
/// Every array element is a row. Objects are kept as-is; other elements
/// are keyed the way object key enumeration sees them (see [`row_from_value`]).
/// A single object becomes one row. Any other JSON value yields no rows.
/// Fails only when the content is not valid JSON.
pub fn decode_rows(content: &str) -> Result<TabularRecord> {
    let value: Value = serde_json::from_str(content)?;

    let rows = match value {
        Value::Array(items) => items.into_iter().map(row_from_value).collect(),
        Value::Object(map) => vec![map],
        other => {
            log::debug!("JSON data is not an array or object: {}", type_name(&other));
            Vec::new()
        }
    };

    Ok(TabularRecord::from(rows))
}

/// Turn one array element into a row.
///
/// Arrays are keyed by index, strings by character index, and other
/// scalars have no keys.
pub fn row_from_value(value: Value) -> DataRow {
    match value {
        Value::Object(map) => map,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        scalar => {
            log::debug!("{} array element has no columns", type_name(&scalar));
            DataRow::new()
        }
    }
}

/// Decode a record (product, testimonial) from a JSON object.
///
/// Missing fields take their empty defaults; malformed JSON and values of
/// the wrong shape are errors.
pub fn decode_record<T: DeserializeOwned>(content: &str) -> Result<T> {
    Ok(serde_json::from_str(content)?)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
