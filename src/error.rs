//! HTTP-facing errors.
//!
//! Only caller misuse and provider ineligibility surface as client errors.
//! Transport failures are absorbed into degraded 200 responses by the
//! resolver and never reach this module.

use std::any::Any;

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::domain::entities::{PreviewOutcome, PreviewResult};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request did not carry a usable URL.
    #[error("{0}")]
    BadRequest(String),

    /// The URL is not eligible for the requested resolver.
    #[error("{0}")]
    Rejected(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Rejected(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl TryFrom<PreviewOutcome> for PreviewResult {
    type Error = AppError;

    fn try_from(outcome: PreviewOutcome) -> Result<Self, Self::Error> {
        match outcome {
            PreviewOutcome::Success(result) | PreviewOutcome::Degraded { result, .. } => {
                Ok(result)
            }
            PreviewOutcome::Rejected { message } => Err(AppError::rejected(message)),
            PreviewOutcome::CallerError { message } => Err(AppError::bad_request(message)),
        }
    }
}

/// Renders a panic caught by `CatchPanicLayer` as a partial-success body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "title": "", "image": "", "error": "Internal server error" })),
    )
        .into_response()
}
