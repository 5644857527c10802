use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Caller-facing text for any persist/mail failure. The failing step is
/// logged but never surfaced.
const GENERIC_FAILURE: &str = "Failed to send message. Please try again later.";

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Store(sqlx::Error),
    Mail(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {msg}"),
            AppError::Store(err) => write!(f, "Store Error: {err}"),
            AppError::Mail(msg) => write!(f, "Mail Error: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Store(err) => {
                tracing::error!("Store error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
            AppError::Mail(msg) => {
                tracing::error!("Mail error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Store(err)
    }
}
