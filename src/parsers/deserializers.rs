use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Custom deserializer for conversation uuids; any non-blank string is accepted
pub fn deserialize_uuid<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if s.trim().is_empty() {
        return Err(Error::custom("uuid cannot be empty"));
    }

    Ok(s)
}

/// Treats an explicit `null` the same as a missing field
pub fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
