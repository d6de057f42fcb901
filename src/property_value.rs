//! Initial property values as read from the manifest.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Ordered string-keyed mapping. Keys keep the order they had in `app.json`.
pub type PropertyMap = Vec<(String, PropertyValue)>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum PropertyValue {
    Bool(bool),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    Null,
    String(String),
    Array(Vec<PropertyValue>),
    Object(PropertyMap),
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Self::Int64(value)
                } else if let Some(value) = number.as_u64() {
                    Self::UInt64(value)
                } else {
                    number.as_f64().map_or(Self::Null, Self::Double)
                }
            }
            Value::String(value) => Self::String(value),
            Value::Array(values) => Self::Array(values.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Deserializes `initialProperties`, which must be a JSON object when present.
pub(crate) fn deserialize_property_map<'de, D>(
    deserializer: D,
) -> Result<Option<PropertyMap>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(
            map.into_iter()
                .map(|(key, value)| (key, PropertyValue::from(value)))
                .collect(),
        )),
        Some(other) => Err(de::Error::invalid_type(
            json_unexpected(&other),
            &"an object of initial properties",
        )),
    }
}

fn json_unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(value) => de::Unexpected::Bool(*value),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(value) => de::Unexpected::Str(value),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
    }
}
