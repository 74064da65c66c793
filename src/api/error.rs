use crate::project::RepositoryError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error type for HTTP handlers.
///
/// Wraps [`RepositoryError`] for record-level failures and turns request
/// extraction failures (malformed JSON, bad path or query values) into the
/// same JSON `{error, code}` shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The request could not be decoded into the expected shape
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Handler result type
pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Repository(RepositoryError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("validation failed: {msg}"),
            ),
            ApiError::Repository(err @ RepositoryError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
            }
            // Engine details stay in the log
            ApiError::Repository(RepositoryError::Storage(err)) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::InvalidRequest(_) => {
                tracing::warn!("Rejected request: {}", self);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", self.to_string())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, Json(body)).into_response()
    }
}
