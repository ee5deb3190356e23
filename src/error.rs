use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures that end a request with a 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("database pool unavailable: {0}")]
    Pool(#[from] r2d2::Error),

    /// Includes dangling author, milestone and label references, which
    /// surface as `NotFound` while an issue is being assembled.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not valid: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("could not open database: {0}")]
    Pool(#[from] r2d2::Error),
}

/// Body shared by every endpoint that answers with prose.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = MessageResponse {
            message: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
