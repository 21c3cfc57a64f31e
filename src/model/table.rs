//! Tabular data types.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A single data row: column header to cell value, in header order.
pub type DataRow = Map<String, Value>;

/// Ordered rows of tabular data.
///
/// Rows parsed from pipe tables share the key set of the header row. Rows
/// decoded from JSON are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabularRecord {
    /// The rows
    pub rows: Vec<DataRow>,
}

impl TabularRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed dataset used when no table could be found.
    pub fn mock() -> Self {
        let rows = [
            json!({ "category": "Category A", "value": 25, "trend": "up" }),
            json!({ "category": "Category B", "value": 42, "trend": "down" }),
            json!({ "category": "Category C", "value": 18, "trend": "stable" }),
            json!({ "category": "Category D", "value": 30, "trend": "up" }),
        ]
        .into_iter()
        .filter_map(|row| match row {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();

        Self { rows }
    }

    /// Build a row by zipping headers against cells; missing cells become "".
    pub fn zip_row(headers: &[String], cells: &[String]) -> DataRow {
        headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let cell = cells.get(i).cloned().unwrap_or_default();
                (header.clone(), Value::String(cell))
            })
            .collect()
    }

    /// Add a row.
    pub fn push(&mut self, row: DataRow) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row, used for shape inference.
    pub fn first(&self) -> Option<&DataRow> {
        self.rows.first()
    }

    /// Column headers (keys of the first row).
    pub fn headers(&self) -> Vec<&str> {
        self.first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Vec<DataRow>> for TabularRecord {
    fn from(rows: Vec<DataRow>) -> Self {
        Self { rows }
    }
}
