use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use quizdeck_auth::AuthError;
use quizdeck_core::error::CoreError;
use quizdeck_genai::GenAiError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain error types and implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `quizdeck_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A credential or token error from `quizdeck_auth`.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A completion service error from `quizdeck_genai`.
    #[error(transparent)]
    GenAi(#[from] GenAiError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} {key} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Credential / token errors ---
            AppError::Auth(auth) => classify_auth_error(auth),

            // --- Completion service errors ---
            AppError::GenAi(err) => classify_genai_error(err),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map an [`AuthError`] to an HTTP status, error code, and message.
///
/// `NotFound` and `InvalidCredentials` intentionally produce byte-identical
/// responses so callers cannot probe which emails are registered.
fn classify_auth_error(err: &AuthError) -> (StatusCode, &'static str, String) {
    match err {
        AuthError::NotFound | AuthError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "Invalid credentials".to_string(),
        ),
        AuthError::DuplicateEmail => (
            StatusCode::CONFLICT,
            "DUPLICATE_EMAIL",
            "Email already exists".to_string(),
        ),
        AuthError::TokenExpired => (
            StatusCode::FORBIDDEN,
            "TOKEN_EXPIRED",
            "Refresh token expired".to_string(),
        ),
        AuthError::TokenInvalid => (
            StatusCode::UNAUTHORIZED,
            "TOKEN_INVALID",
            "Invalid token".to_string(),
        ),
        AuthError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        AuthError::ServiceUnavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "SERVICE_UNAVAILABLE",
            "Service temporarily unavailable".to_string(),
        ),
        AuthError::Signing(msg) | AuthError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal auth error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Map a [`GenAiError`] to an HTTP status, error code, and message.
///
/// A client-side timeout is a 503 (retry later); any other upstream failure
/// is a 502. Either way the created test row survives, so questions can
/// still be added manually.
fn classify_genai_error(err: &GenAiError) -> (StatusCode, &'static str, String) {
    if err.is_timeout() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "SERVICE_UNAVAILABLE",
            "Question generation timed out".to_string(),
        );
    }
    tracing::error!(error = %err, "Completion service failure");
    (
        StatusCode::BAD_GATEWAY,
        "UPSTREAM_ERROR",
        "Question generation failed".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Pool timeouts and I/O failures map to 503.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
            tracing::error!(error = %err, "Database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                "Service temporarily unavailable".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
