use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ServiceError;

/// A single herd record ("cow").
///
/// Every field is optional on input (missing or `null` become empty) and
/// omitted on output when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub finder: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    /// Decode a request body. Must be a JSON object; unknown fields are ignored.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ServiceError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| ServiceError::Decode(e.to_string()))?;
        if !value.is_object() {
            return Err(ServiceError::Decode("expected a JSON object".into()));
        }
        serde_json::from_value(value).map_err(|e| ServiceError::Decode(e.to_string()))
    }

    /// Case-insensitive name order, ties broken by id so listings are stable.
    pub fn listing_order(&self, other: &Self) -> Ordering {
        self.name
            .to_lowercase()
            .cmp(&other.name.to_lowercase())
            .then_with(|| self.id.cmp(&other.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_omitted() {
        let rec = Record { id: "x".into(), name: "Bessie".into(), ..Default::default() };
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"name":"Bessie","id":"x"}"#);
    }

    #[test]
    fn missing_null_and_unknown_fields_decode() {
        let rec = Record::from_json(br#"{"id":"x","date":null,"horns":2}"#).unwrap();
        assert_eq!(rec.id, "x");
        assert_eq!(rec.date, "");
        assert_eq!(rec.name, "");
    }

    #[test]
    fn malformed_body_is_decode_error() {
        assert!(matches!(Record::from_json(b"{not json"), Err(ServiceError::Decode(_))));
        assert!(matches!(Record::from_json(b"[]"), Err(ServiceError::Decode(_))));
        assert!(matches!(Record::from_json(br#"{"name":5}"#), Err(ServiceError::Decode(_))));
    }

    #[test]
    fn listing_order_ignores_case() {
        let mut recs = vec![
            Record { id: "1".into(), name: "clarabelle".into(), ..Default::default() },
            Record { id: "2".into(), name: "Bessie".into(), ..Default::default() },
            Record { id: "3".into(), name: "annabelle".into(), ..Default::default() },
        ];
        recs.sort_by(Record::listing_order);
        let names: Vec<_> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["annabelle", "Bessie", "clarabelle"]);
    }
}
