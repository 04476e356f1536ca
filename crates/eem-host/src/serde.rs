use ::serde::{Deserialize, Serialize};
use eem_core::{ErrorInfo, MeasureError};
use serde_json::Value;

fn serde_error(code: &str, err: impl ToString) -> MeasureError {
    MeasureError::Serde(ErrorInfo::new(code, err.to_string()))
}

// Rebuilds every object with its keys in sorted order so the byte form is
// stable regardless of serde_json's map implementation.
fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|left, right| left.0.cmp(&right.0));
            for (_, child) in &mut entries {
                sort_keys(child);
            }
            map.extend(entries);
        }
        Value::Array(items) => {
            for item in items {
                sort_keys(item);
            }
        }
        _ => {}
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, MeasureError> {
    let mut value =
        serde_json::to_value(value).map_err(|err| serde_error("eem_host.json_encode", err))?;
    sort_keys(&mut value);
    serde_json::to_vec(&value).map_err(|err| serde_error("eem_host.json_write", err))
}

/// Restores a value from canonical JSON bytes.
pub fn from_json_slice<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, MeasureError> {
    serde_json::from_slice(data).map_err(|err| serde_error("eem_host.json_read", err))
}
