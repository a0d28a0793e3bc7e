use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extractor::ParseError;
use crate::analysis::fetcher::FetchError;
use crate::analysis::tagger::TaggerError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Tagger error: {0}")]
    Tagger(#[from] TaggerError),

    #[error("Completion service error: {0}")]
    ServiceUnavailable(LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Fetch(e) => {
                tracing::warn!("Job fetch failed: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "FETCH_ERROR",
                    format!("Failed to fetch job description: {}", fetch_summary(e)),
                )
            }
            AppError::Parse(e) => {
                tracing::warn!("Job page parse failed: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "PARSE_ERROR",
                    "The job page could not be parsed".to_string(),
                )
            }
            AppError::Tagger(e) => {
                tracing::error!("Tagger error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TAGGER_ERROR",
                    "Text analysis failed".to_string(),
                )
            }
            AppError::ServiceUnavailable(e) => {
                tracing::error!("Completion service error: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    "AI service unavailable".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        // `detail` mirrors the message for clients that read FastAPI-style errors.
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message.clone()
            },
            "detail": message
        }));

        (status, body).into_response()
    }
}

impl From<LlmError> for AppError {
    /// The provider failing is a 503; a well-formed reply with nothing in it is
    /// our problem, not theirs.
    fn from(error: LlmError) -> Self {
        match error {
            LlmError::EmptyContent => AppError::Internal(anyhow::Error::new(error)),
            other => AppError::ServiceUnavailable(other),
        }
    }
}

/// Caller-facing reason for a failed fetch. Transport causes are reduced to
/// their category so client internals stay in the log.
fn fetch_summary(error: &FetchError) -> String {
    match error {
        FetchError::InvalidUrl { reason, .. } => format!("invalid URL ({reason})"),
        FetchError::Status { status, .. } => format!("the page responded with HTTP {status}"),
        FetchError::Transport { source, .. } if source.is_timeout() => {
            "the request timed out".to_string()
        }
        FetchError::Transport { source, .. } if source.is_connect() => {
            "could not connect to the host".to_string()
        }
        FetchError::Transport { .. } => "the request could not be completed".to_string(),
        FetchError::TooLarge { limit, .. } => format!("the page is larger than {limit} bytes"),
        FetchError::Body { .. } => "the response body could not be read".to_string(),
    }
}
