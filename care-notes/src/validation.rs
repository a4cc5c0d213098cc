//! Request body validation for `POST /care-notes`.
//!
//! Works on raw JSON values rather than derived deserialization so every
//! field problem is collected and reported together.
//!
//! Policy: `residentName` and `authorName` must contain at least one
//! non-whitespace character. `content` may be empty. Accepted values are
//! stored exactly as sent (no trimming). Extra keys, including `id` and
//! `dateTime`, are ignored.

use care_notes_types::{fields, FieldError, FieldErrorKind, NewCareNote};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Parse and validate a raw request body.
pub fn parse_new_note(body: &[u8]) -> Result<NewCareNote, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::new(vec![FieldError::body(
            FieldErrorKind::Missing,
            "Field required",
        )]));
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        ValidationError::new(vec![FieldError::body(
            FieldErrorKind::JsonInvalid,
            format!("JSON decode error: {}", e),
        )])
    })?;

    validate_new_note(&value)
}

/// Validate an already-parsed JSON body.
pub fn validate_new_note(value: &Value) -> Result<NewCareNote, ValidationError> {
    let Some(object) = value.as_object() else {
        return Err(ValidationError::new(vec![FieldError::body(
            FieldErrorKind::ObjectType,
            "Input should be a valid dictionary or object",
        )]));
    };

    let mut errors = Vec::new();
    let resident_name = required_name(object, fields::RESIDENT_NAME, &mut errors);
    let content = required_string(object, fields::CONTENT, &mut errors);
    let author_name = required_name(object, fields::AUTHOR_NAME, &mut errors);

    match (resident_name, content, author_name) {
        (Some(resident_name), Some(content), Some(author_name)) => {
            Ok(NewCareNote::new(resident_name, content, author_name))
        }
        _ => Err(ValidationError::new(errors)),
    }
}

fn required_string<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match object.get(field) {
        None => {
            errors.push(FieldError::field(field, FieldErrorKind::Missing, "Field required"));
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            errors.push(FieldError::field(
                field,
                FieldErrorKind::StringType,
                "Input should be a valid string",
            ));
            None
        }
    }
}

fn required_name<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    let value = required_string(object, field, errors)?;
    if value.trim().is_empty() {
        errors.push(FieldError::field(
            field,
            FieldErrorKind::StringEmpty,
            "String should not be empty",
        ));
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kinds(err: &ValidationError) -> Vec<(Option<&str>, FieldErrorKind)> {
        err.errors.iter().map(|e| (e.field_name(), e.kind)).collect()
    }

    #[test]
    fn test_valid_body() {
        let note = validate_new_note(&json!({
            "residentName": "Jane Doe",
            "content": "Resting comfortably.",
            "authorName": "Nurse Alex"
        }))
        .unwrap();
        assert_eq!(note, NewCareNote::new("Jane Doe", "Resting comfortably.", "Nurse Alex"));
    }

    #[test]
    fn test_empty_content_allowed() {
        let note = validate_new_note(&json!({
            "residentName": "Jane Doe",
            "content": "",
            "authorName": "Nurse Alex"
        }))
        .unwrap();
        assert_eq!(note.content, "");
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let note = validate_new_note(&json!({
            "residentName": "  Jane Doe ",
            "content": "\tline one\n",
            "authorName": "Nurse Alex"
        }))
        .unwrap();
        assert_eq!(note.resident_name, "  Jane Doe ");
        assert_eq!(note.content, "\tline one\n");
    }

    #[test]
    fn test_missing_author() {
        let err = validate_new_note(&json!({
            "residentName": "Jane Doe",
            "content": "Resting comfortably."
        }))
        .unwrap_err();
        assert_eq!(kinds(&err), vec![(Some("authorName"), FieldErrorKind::Missing)]);
    }

    #[test]
    fn test_all_errors_reported_together() {
        let err = validate_new_note(&json!({ "content": 42 })).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                (Some("residentName"), FieldErrorKind::Missing),
                (Some("content"), FieldErrorKind::StringType),
                (Some("authorName"), FieldErrorKind::Missing),
            ]
        );
    }

    #[test]
    fn test_blank_names_rejected() {
        let err = validate_new_note(&json!({
            "residentName": "",
            "content": "note",
            "authorName": "   "
        }))
        .unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                (Some("residentName"), FieldErrorKind::StringEmpty),
                (Some("authorName"), FieldErrorKind::StringEmpty),
            ]
        );
    }

    #[test]
    fn test_null_is_not_a_string() {
        let err = validate_new_note(&json!({
            "residentName": null,
            "content": "note",
            "authorName": "Nurse Alex"
        }))
        .unwrap_err();
        assert_eq!(kinds(&err), vec![(Some("residentName"), FieldErrorKind::StringType)]);
    }

    #[test]
    fn test_non_object_body() {
        let err = validate_new_note(&json!(["Jane Doe", "note", "Nurse Alex"])).unwrap_err();
        assert_eq!(kinds(&err), vec![(None, FieldErrorKind::ObjectType)]);
    }

    #[test]
    fn test_client_id_and_timestamp_ignored() {
        let note = validate_new_note(&json!({
            "id": "attacker-chosen",
            "dateTime": "1999-01-01T00:00:00Z",
            "residentName": "Jane Doe",
            "content": "note",
            "authorName": "Nurse Alex"
        }))
        .unwrap();
        assert_eq!(note, NewCareNote::new("Jane Doe", "note", "Nurse Alex"));
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_new_note(b"{\"residentName\": ").unwrap_err();
        assert_eq!(kinds(&err), vec![(None, FieldErrorKind::JsonInvalid)]);
    }

    #[test]
    fn test_parse_empty_body() {
        let err = parse_new_note(b"").unwrap_err();
        assert_eq!(kinds(&err), vec![(None, FieldErrorKind::Missing)]);
    }

    #[test]
    fn test_parse_valid_bytes() {
        let body = br#"{"residentName":"Jane Doe","content":"Resting comfortably.","authorName":"Nurse Alex"}"#;
        assert!(parse_new_note(body).is_ok());
    }
}
