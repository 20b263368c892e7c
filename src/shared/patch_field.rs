use serde::{Deserialize, Deserializer};

/// Deserializes a field that may be absent, `null`, or set.
///
/// Use together with `#[serde(default)]`: an absent field stays `None`, an explicit
/// `null` becomes `Some(None)` and a value becomes `Some(Some(value))`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
