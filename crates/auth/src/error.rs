//! Error taxonomy for the credential and token authority.

/// Errors produced by [`Authority`](crate::Authority) operations.
///
/// Every sqlx and signing failure is translated at this boundary; callers
/// never see a raw database error.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No credential record exists for the given email.
    #[error("user not found")]
    NotFound,

    /// The password did not match the stored hash.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A credential record with this email already exists.
    #[error("email already exists")]
    DuplicateEmail,

    /// The presented token is past its embedded expiry.
    #[error("token expired")]
    TokenExpired,

    /// The presented token failed signature or structural checks, or was
    /// superseded by a newer login.
    #[error("invalid token")]
    TokenInvalid,

    /// Token encoding failed.
    #[error("token signing failed: {0}")]
    Signing(String),

    /// Rejected input, e.g. a too-short password.
    #[error("{0}")]
    Validation(String),

    /// The credential store could not be reached in time.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Any other internal failure. Details go to the log, not the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // PostgreSQL unique constraint violation: error code 23505
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                if db_err.constraint() == Some("uq_users_email") {
                    return AuthError::DuplicateEmail;
                }
                tracing::error!(error = %db_err, "Unexpected unique violation");
                AuthError::Internal("database constraint violation".to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                tracing::error!(error = %err, "Credential store unavailable");
                AuthError::ServiceUnavailable("credential store unavailable".to_string())
            }
            _ => {
                tracing::error!(error = %err, "Credential store error");
                AuthError::Internal("credential store error".to_string())
            }
        }
    }
}
