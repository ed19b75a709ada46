//! Converts payload structures into plain JSON values

use serde::Serialize;
use serde_json::Value;

use crate::error::PayloadError;

/// Serialize any tree-shaped structure into JSON primitives.
///
/// Numeric series become arrays of numbers, maps become objects with their
/// keys preserved, nested values are converted recursively. Non-finite
/// floats are emitted as `null`. Since a `Value` serializes to itself,
/// applying this twice gives the same result as applying it once.
pub fn serialize_payload<T: Serialize + ?Sized>(value: &T) -> Result<Value, PayloadError> {
    Ok(serde_json::to_value(value)?)
}
