//! Deserialization helpers for loosely typed backend/UI JSON.

use serde::{Deserialize, Deserializer};

/// Accept an identifier sent either as a JSON string or a JSON number.
///
/// # Errors
///
/// Fails for any other JSON type.
pub fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

/// Treat an explicit JSON `null` like a missing field.
///
/// Pair with `#[serde(default)]` so both absent and `null` yield
/// `T::default()`.
///
/// # Errors
///
/// Fails when the value is present, non-null and not a valid `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
