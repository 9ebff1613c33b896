use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Unsupported Content-Type. Use application/json or text/plain.")]
    UnsupportedMediaType,

    #[error("{0}")]
    Unprocessable(String),

    /// Body extraction failed before decoding, e.g. over the size limit.
    #[error("{1}")]
    BodyRejected(StatusCode, String),

    #[error("Empty summary from model.")]
    EmptySummary,

    #[error("Failed to access Gemini API: {0}")]
    GeminiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl SummarizeError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        SummarizeError::Unprocessable(message.into())
    }

    /// HTTP status a failed request reports for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            SummarizeError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            SummarizeError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SummarizeError::BodyRejected(status, _) => *status,
            SummarizeError::EmptySummary
            | SummarizeError::GeminiError(_)
            | SummarizeError::HttpError(_)
            | SummarizeError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(error: serde_json::Error) -> Self {
        SummarizeError::GeminiError(format!("Failed to decode response: {error}"))
    }
}

impl IntoResponse for SummarizeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
