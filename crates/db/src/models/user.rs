//! User entity model and DTOs.

use quizdeck_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Handlers pick the public fields (id, name, email) explicitly.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    /// SHA-256 hex digest of the most recently issued refresh token.
    /// `None` until the first login; replaced wholesale on every login.
    pub refresh_token_hash: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
