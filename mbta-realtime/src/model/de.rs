//! Lenient deserializers for response fields.
//!
//! The API sends ids, names, coordinates and flags as strings, but numbers,
//! booleans and nulls show up in older payloads. Scalars are kept as the
//! string the server would have sent. A field of the wrong shape falls back
//! to empty instead of failing the whole response, and an array element
//! that is not a record is skipped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use tracing::warn;

/// Scalar as a string. Anything else becomes the empty string.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_string(value).unwrap_or_default())
}

/// Like [`string_or_number`], but non-scalars stay `None`.
pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_string(value))
}

/// Array of records. A missing or non-array value is empty; elements that
/// do not deserialize are logged and skipped.
pub(crate) fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match T::deserialize(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "skipping malformed element in response");
                None
            }
        })
        .collect())
}

fn scalar_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(number_string(&n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// A JSON number as the API would print it: integral floats lose their
/// trailing `.0`, so `70061.0` and `70061` give the same string.
pub(crate) fn number_string(n: &Number) -> String {
    if n.is_f64()
        && let Some(f) = n.as_f64()
        && f.fract() == 0.0
        && f.abs() <= MAX_EXACT_FLOAT
    {
        return (f as i64).to_string();
    }
    n.to_string()
}
