use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to callers of the name API.
///
/// Anything else that can go wrong with a name (stray punctuation, too many
/// tokens to expand) degrades to best-effort output plus a log event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("name must be a string, got {found}")]
    InvalidArgumentType { found: &'static str },

    #[error("name must not be empty")]
    EmptyInput,
}

impl IntoResponse for NameError {
    fn into_response(self) -> Response {
        let error = match self {
            NameError::InvalidArgumentType { .. } => "Invalid Argument Type",
            NameError::EmptyInput => "Empty Input",
        };

        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": error,
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
