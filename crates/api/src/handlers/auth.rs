//! Handlers for signup, login, and token refresh.
//!
//! These are thin: validation at the boundary, then a single call into
//! [`Authority`](quizdeck_auth::Authority). Status mapping lives in
//! [`crate::error`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use quizdeck_core::types::DbId;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

/// Request body for `POST /login`.
///
/// Deliberately unvalidated: credentials are checked as-is, and every
/// authentication failure is the same 401, so a caller cannot tell a
/// malformed email from an unknown one.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful login response: public user fields plus both tokens.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Successful refresh response.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signup
///
/// Register a new user. Returns 201 with a confirmation message.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    // 1. Boundary validation; the authority re-checks the password policy.
    input.validate()?;

    // 2. Delegate to the authority.
    state
        .authority
        .signup(&input.name, &input.email, &input.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// POST /login
///
/// Authenticate with email + password. Returns both tokens and the user's
/// public fields; the password hash never leaves the authority.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let outcome = state.authority.login(&input.email, &input.password).await?;

    Ok(Json(LoginResponse {
        id: outcome.user.id,
        name: outcome.user.name,
        email: outcome.user.email,
        access_token: outcome.access_token,
        refresh_token: outcome.refresh_token,
    }))
}

/// POST /refresh
///
/// Exchange a valid refresh token for a new access token.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<RefreshResponse>> {
    let access_token = state.authority.refresh(&input.refresh_token).await?;
    Ok(Json(RefreshResponse { access_token }))
}
