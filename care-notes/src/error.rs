use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use care_notes_types::{FieldError, ValidationErrorBody};
use thiserror::Error;

use crate::config::ConfigError;

/// Rejected create request. Carries every field-level problem found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid request body ({})", summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorBody {
                detail: self.errors,
            }),
        )
            .into_response()
    }
}

/// Failures that stop the binary before it starts serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
