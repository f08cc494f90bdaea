use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Error kinds surfaced by the API, each mapped to a single response status.
///
/// Validation failures carry the ordered list of per-field messages; every
/// 4xx response has a JSON body, and 5xx bodies never leak the underlying
/// fault to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("access denied")]
    AuthenticationRequired,

    #[error("validation failed")]
    ValidationFailed(Vec<String>),

    #[error("{0}")]
    UniquenessConflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            // Email is the only unique column in the schema.
            if db.is_unique_violation() {
                return ApiError::UniquenessConflict(
                    "This email address exists already in our database".to_string(),
                );
            }
        }
        ApiError::Internal(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Access denied" })),
            )
                .into_response(),
            ApiError::ValidationFailed(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::UniquenessConflict(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}
