use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for best-effort optional fields
///
/// Accepts any JSON value and yields `None` when it does not have the expected
/// shape, instead of failing the whole record. Use with `#[serde(default)]`.
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
