//! Firestore typed values and documents.
//!
//! The REST API wraps every field in a single-key object naming its type
//! (`{"stringValue": "x"}`, `{"integerValue": "42"}`, ...). [`Value`] is the
//! in-memory form; its serde impls produce and accept exactly that shape.
//!
//! Documents are usually built from plain `Serialize` structs through
//! [`to_fields`], and read back with [`Document::deserialize`].

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Field map of a document or of a nested `mapValue`.
pub type Fields = BTreeMap<String, Value>;

/// A single Firestore value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireValue", from = "WireValue")]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    /// RFC 3339 timestamp, kept as text.
    Timestamp(String),
    String(String),
    Array(Vec<Value>),
    Map(Fields),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Timestamp(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Fields> {
        match self {
            Value::Map(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Double(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(values) => {
                Value::Array(values.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::Integer(i) => serde_json::Value::from(i),
            Value::Double(d) => serde_json::Number::from_f64(d)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Timestamp(s) | Value::String(s) => serde_json::Value::String(s),
            Value::Array(values) => {
                serde_json::Value::Array(values.into_iter().map(Into::into).collect())
            }
            Value::Map(fields) => serde_json::Value::Object(
                fields.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

/// REST representation of [`Value`].
#[derive(Serialize, Deserialize)]
enum WireValue {
    #[serde(rename = "nullValue")]
    Null(()),
    #[serde(rename = "booleanValue")]
    Boolean(bool),
    #[serde(rename = "integerValue", with = "int64_string")]
    Integer(i64),
    #[serde(rename = "doubleValue")]
    Double(f64),
    #[serde(rename = "timestampValue")]
    Timestamp(String),
    #[serde(rename = "stringValue")]
    String(String),
    #[serde(rename = "arrayValue")]
    Array(WireArray),
    #[serde(rename = "mapValue")]
    Map(WireMap),
}

#[derive(Serialize, Deserialize)]
struct WireArray {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    values: Vec<Value>,
}

#[derive(Serialize, Deserialize)]
struct WireMap {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    fields: Fields,
}

impl From<Value> for WireValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => WireValue::Null(()),
            Value::Boolean(b) => WireValue::Boolean(b),
            Value::Integer(i) => WireValue::Integer(i),
            Value::Double(d) => WireValue::Double(d),
            Value::Timestamp(s) => WireValue::Timestamp(s),
            Value::String(s) => WireValue::String(s),
            Value::Array(values) => WireValue::Array(WireArray { values }),
            Value::Map(fields) => WireValue::Map(WireMap { fields }),
        }
    }
}

impl From<WireValue> for Value {
    fn from(wire: WireValue) -> Self {
        match wire {
            WireValue::Null(()) => Value::Null,
            WireValue::Boolean(b) => Value::Boolean(b),
            WireValue::Integer(i) => Value::Integer(i),
            WireValue::Double(d) => Value::Double(d),
            WireValue::Timestamp(s) => Value::Timestamp(s),
            WireValue::String(s) => Value::String(s),
            WireValue::Array(array) => Value::Array(array.values),
            WireValue::Map(map) => Value::Map(map.fields),
        }
    }
}

/// int64 values travel as JSON strings; numbers are accepted on input too.
mod int64_string {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s.parse().map_err(de::Error::custom),
            Raw::Number(n) => Ok(n),
        }
    }
}

/// A stored document: its id (last path segment) and fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Deserializes the fields into `T`, treating the document as a JSON object.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let object: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone().into()))
            .collect();
        serde_json::from_value(serde_json::Value::Object(object))
    }
}

/// Converts a serializable struct into document fields.
///
/// The value must serialize to a JSON object; each top-level key becomes a field.
pub fn to_fields<T: Serialize>(value: &T) -> Result<Fields, serde_json::Error> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => Ok(map
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect()),
        other => Err(serde::ser::Error::custom(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        display_name: String,
        likes_count: i64,
        is_pinned: bool,
        images: Vec<String>,
        links: BTreeMap<String, String>,
    }

    fn sample() -> Sample {
        Sample {
            display_name: "John Doe".to_string(),
            likes_count: 245,
            is_pinned: true,
            images: vec!["https://example.com/a.jpg".to_string()],
            links: BTreeMap::from([(
                "facebook".to_string(),
                "https://facebook.com/club-1".to_string(),
            )]),
        }
    }

    #[test]
    fn test_integer_encoded_as_string() {
        let encoded = serde_json::to_value(Value::Integer(312)).unwrap();
        assert_eq!(encoded, json!({ "integerValue": "312" }));
    }

    #[test]
    fn test_wire_shape_of_struct_fields() {
        let fields = to_fields(&sample()).unwrap();
        let encoded = serde_json::to_value(&fields).unwrap();

        assert_eq!(
            encoded,
            json!({
                "displayName": { "stringValue": "John Doe" },
                "images": { "arrayValue": { "values": [
                    { "stringValue": "https://example.com/a.jpg" }
                ] } },
                "isPinned": { "booleanValue": true },
                "likesCount": { "integerValue": "245" },
                "links": { "mapValue": { "fields": {
                    "facebook": { "stringValue": "https://facebook.com/club-1" }
                } } }
            })
        );
    }

    #[test]
    fn test_decode_rest_response_fields() {
        let raw = json!({
            "uid": { "stringValue": "user-1" },
            "followersCount": { "integerValue": "120" },
            "rating": { "doubleValue": 4.5 },
            "bio": { "nullValue": null },
            "joinedAt": { "timestampValue": "2024-01-01T00:00:00Z" },
            "followingClubs": { "arrayValue": {} },
            "socialLinks": { "mapValue": {} }
        });

        let fields: Fields = serde_json::from_value(raw).unwrap();
        assert_eq!(fields["uid"].as_str(), Some("user-1"));
        assert_eq!(fields["followersCount"].as_i64(), Some(120));
        assert_eq!(fields["rating"], Value::Double(4.5));
        assert_eq!(fields["bio"], Value::Null);
        assert_eq!(fields["joinedAt"].as_str(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(fields["followingClubs"].as_array(), Some(&[][..]));
        assert!(fields["socialLinks"].as_map().unwrap().is_empty());
    }

    #[test]
    fn test_document_deserializes_into_struct() {
        let doc = Document::new("post-1", to_fields(&sample()).unwrap());
        let back: Sample = doc.deserialize().unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(to_fields(&42).is_err());
        assert!(to_fields(&vec!["a"]).is_err());
    }
}
