//! Lenient deserialization helpers.
//!
//! Catalog files are hand-edited and accumulate oddities: unquoted years
//! load as integers, a stray `title: [..]` should not kill the session.
//! These helpers coerce scalars to strings and degrade everything else to
//! an absent value instead of returning a deserialization error.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::record::DateSource;

/// Coerce a YAML scalar to its string form. Non-scalars degrade to `None`.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Deserialize the `id` field. A missing or non-scalar id degrades to an
/// empty string (validation reports it) instead of failing the load.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string).unwrap_or_default())
}

/// Deserialize an optional free-text field, tolerating non-string scalars.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string))
}

/// Deserialize a tag list, keeping scalar entries and dropping the rest.
/// A non-sequence value degrades to an empty list.
pub fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let tags = match value {
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
        _ => Vec::new(),
    };
    Ok(tags)
}

/// Deserialize a `date_source` field. Unrecognized values map to
/// [`DateSource::Unknown`] rather than failing.
pub fn lenient_date_source<'de, D>(deserializer: D) -> Result<Option<DateSource>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(scalar_to_string)
        .map(|s| DateSource::from_label(&s)))
}
