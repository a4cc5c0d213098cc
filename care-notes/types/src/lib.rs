//! Shared wire types for the care notes service and its HTTP clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JSON field names of the create payload, as clients send them.
pub mod fields {
    pub const RESIDENT_NAME: &str = "residentName";
    pub const CONTENT: &str = "content";
    pub const AUTHOR_NAME: &str = "authorName";
}

// =====================================================
// Domain Types
// =====================================================

/// A stored care note. `id` and `date_time` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareNote {
    pub id: Uuid,
    pub resident_name: String,
    #[serde(with = "timestamp")]
    pub date_time: DateTime<Utc>,
    pub content: String,
    pub author_name: String,
}

/// A validated create request. Carries no id or timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCareNote {
    pub resident_name: String,
    pub content: String,
    pub author_name: String,
}

impl NewCareNote {
    pub fn new(
        resident_name: impl Into<String>,
        content: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        Self {
            resident_name: resident_name.into(),
            content: content.into(),
            author_name: author_name.into(),
        }
    }
}

// =====================================================
// Response Types
// =====================================================

/// Plain `{"message": ...}` body returned by the root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMessage {
    pub message: String,
}

/// Category of a single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Required field absent
    Missing,
    /// Field present but not a string
    StringType,
    /// Name field empty or whitespace only
    StringEmpty,
    /// Body is not parseable JSON
    JsonInvalid,
    /// Body is JSON but not an object
    ObjectType,
}

/// One entry of a 422 response. `loc` is the path to the offending value,
/// e.g. `["body", "authorName"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// Error attached to a named body field.
    pub fn field(name: &str, kind: FieldErrorKind, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), name.to_string()],
            msg: msg.into(),
            kind,
        }
    }

    /// Error attached to the body as a whole.
    pub fn body(kind: FieldErrorKind, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            kind,
        }
    }

    /// The field name this error points at, if any.
    pub fn field_name(&self) -> Option<&str> {
        self.loc.get(1).map(String::as_str)
    }
}

/// Body of a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub detail: Vec<FieldError>,
}

/// `dateTime` wire format: ISO-8601 UTC, microseconds, trailing `Z`.
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

    pub fn format(dt: &DateTime<Utc>) -> String {
        dt.format(FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
