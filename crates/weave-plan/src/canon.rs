use serde::de::DeserializeOwned;
use serde::Serialize;
use weave_core::{ErrorInfo, WeaveError};

/// Serializes a value as canonical JSON bytes.
///
/// Values pass through `serde_json::Value`, whose object maps keep keys
/// sorted, so identical payloads always produce identical bytes.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, WeaveError> {
    let tree = serde_json::to_value(value)
        .map_err(|err| WeaveError::Serde(ErrorInfo::new("json-encode", err.to_string())))?;
    serde_json::to_vec(&tree)
        .map_err(|err| WeaveError::Serde(ErrorInfo::new("json-encode", err.to_string())))
}

/// Deserializes a value from JSON bytes produced by this crate.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, WeaveError> {
    serde_json::from_slice(bytes)
        .map_err(|err| WeaveError::Serde(ErrorInfo::new("json-decode", err.to_string())))
}
