//! Chart kind inference for tabular data.

use serde_json::Value;

use crate::model::{TabularRecord, VizType};

/// Rows at or below this count with a single numeric column render as a pie.
const PIE_MAX_ROWS: usize = 5;

/// Infer the most suitable chart kind.
///
/// Only the first row is inspected. No numeric columns gives a table, one
/// gives a pie (up to five rows) or a bar chart, two or more give a scatter
/// plot. Empty data gives a bar chart.
pub fn infer_viz_type(data: &TabularRecord) -> VizType {
    let Some(first) = data.first() else {
        return VizType::Bar;
    };

    let numeric_keys = first.values().filter(|v| is_numeric_like(v)).count();

    let viz_type = match numeric_keys {
        0 => VizType::Table,
        1 if data.len() <= PIE_MAX_ROWS => VizType::Pie,
        1 => VizType::Bar,
        _ => VizType::Scatter,
    };

    log::debug!(
        "{} numeric columns over {} rows -> {}",
        numeric_keys,
        data.len(),
        viz_type
    );
    viz_type
}

/// Check whether a cell coerces to a number.
///
/// Numbers, booleans, null and blank strings coerce; strings must parse as
/// a finite decimal number, `Infinity`, or an unsigned `0x`, `0o` or `0b`
/// integer literal; an array coerces when it is empty or
/// holds one coercible element; objects never do.
pub fn is_numeric_like(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => is_numeric_str(s),
        Value::Array(items) => match items.as_slice() {
            [] => true,
            [single] => is_numeric_like(single),
            _ => false,
        },
        Value::Object(_) => false,
    }
}

fn is_numeric_str(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return true;
    }
    if matches!(s, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    if let Some(radix) = radix_literal(s) {
        return radix;
    }
    // Rust accepts "inf" and "nan" spellings that are not numbers here
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return false;
    }
    s.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Validate `0x`, `0o` and `0b` literals; `None` when `s` has no such prefix.
fn radix_literal(s: &str) -> Option<bool> {
    let prefix = s.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    Some(!digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)))
}
