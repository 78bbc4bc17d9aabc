// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure, timeout or non-2xx status from Ollama.
    #[error("Ollama service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Ollama answered, but not with the shape we expect.
    #[error("Unexpected response format from Ollama: {0}")]
    UpstreamMalformed(String),

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    InvalidRequest(#[from] JsonRejection),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::UpstreamMalformed(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidRequest(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            AppError::InvalidRequest(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(%status, %detail, "chat request failed");
        } else {
            tracing::warn!(%status, %detail, "chat request rejected");
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}
