// src/models/record.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Server-assigned identifier. Backends emit either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// A stored record: the server id plus the resource fields.
///
/// Fields the model does not know are kept in `extra` and written back on
/// update, so a PUT never drops server data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: RecordId,
    #[serde(flatten)]
    pub data: T,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> Entry<T> {
    pub fn new(id: impl Into<RecordId>, data: T) -> Self {
        Self {
            id: id.into(),
            data,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::testimonial::Testimonial;

    #[test]
    fn id_accepts_numbers_and_strings() {
        let numeric: RecordId = serde_json::from_str("7").unwrap();
        let text: RecordId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(numeric, RecordId::Number(7));
        assert_eq!(text, RecordId::Text("a1b2".into()));
        assert_eq!(numeric.to_string(), "7");
        assert_eq!(text.to_string(), "a1b2");
    }

    #[test]
    fn entry_flattens_fields_next_to_id() {
        let entry = Entry::new(
            3,
            Testimonial {
                content: "Great".into(),
                author: "Ana".into(),
                role: "CTO".into(),
                company: "Acme".into(),
            },
        );

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["author"], "Ana");

        let back: Entry<Testimonial> = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = serde_json::json!({
            "id": 1,
            "author": "Ana",
            "avatar": "/a.png",
            "rating": 5
        });

        let mut entry: Entry<Testimonial> = serde_json::from_value(raw).unwrap();
        assert_eq!(entry.data.author, "Ana");
        assert_eq!(entry.extra["avatar"], "/a.png");
        assert!(!entry.extra.contains_key("author"));
        assert!(!entry.extra.contains_key("id"));

        entry.data.company = "Acme".into();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["avatar"], "/a.png");
        assert_eq!(value["rating"], 5);
        assert_eq!(value["company"], "Acme");
    }
}
