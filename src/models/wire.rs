//! Lenient decoders for values produced by the remote sheet.
//!
//! The backend is a spreadsheet script: a phone number may arrive as a JSON
//! number, a counter as `12.0`, an empty cell as `null`. These helpers turn
//! such cells into the stable internal shape instead of failing the whole
//! response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String form of a single cell. `null` becomes the empty string.
pub(crate) fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Non-negative counter from a cell; anything unreadable counts as 0.
pub(crate) fn cell_to_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    }
}

pub(crate) fn lenient_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(d).map(|v| cell_to_string(&v))
}

pub(crate) fn lenient_count<'de, D>(d: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(d).map(|v| cell_to_count(&v))
}

/// A list of identifiers; `null` is an empty list, scalar cells are stringified.
pub(crate) fn lenient_strings<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let cells = Option::<Vec<Value>>::deserialize(d)?.unwrap_or_default();
    Ok(cells
        .iter()
        .map(cell_to_string)
        .filter(|s| !s.is_empty())
        .collect())
}

/// `null` decodes as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}
