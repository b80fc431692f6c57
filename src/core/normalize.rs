//! Value normalization for human-oriented rendering
//!
//! Field values are encoded to JSON bytes and decoded again before display.
//! The round-trip collapses every supported value kind into plain JSON
//! scalars, objects and arrays without changing what is printed: integers
//! stay integers, strings stay strings.

use super::error::Result;
use super::fields::{FieldValue, Fields};
use serde_json::{Map, Value};

/// Encode `fields` and decode them back into a JSON object
pub fn normalize(fields: &Fields) -> Result<Map<String, Value>> {
    let encoded = serde_json::to_vec(&fields.to_json_map()?)?;
    Ok(serde_json::from_slice(&encoded)?)
}

/// Normalize a single value, returning it in `FieldValue` form
pub fn normalize_value(value: &FieldValue) -> Result<FieldValue> {
    let encoded = serde_json::to_vec(&value.to_json_value()?)?;
    let decoded: Value = serde_json::from_slice(&encoded)?;
    Ok(FieldValue::from_json(decoded))
}
