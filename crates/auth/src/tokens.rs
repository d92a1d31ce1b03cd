//! HS256 token minting and verification for access and refresh tokens.
//!
//! Both token kinds carry the same two claims, `email` and `exp`; the signing
//! secret is what distinguishes them. Refresh tokens are additionally pinned
//! server-side by a SHA-256 digest stored on the credential record, so a newer
//! login supersedes every previously issued refresh token.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::AuthConfig;
use crate::error::AuthError;

/// JWT claims embedded in every token.
///
/// Deliberately minimal: nothing in here is random per call, so the same
/// email and expiry always encode to the same token string.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The authenticated user's email (the credential lookup key).
    pub email: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Which signing secret a token is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Short-lived token presented on authenticated API calls.
    Access,
    /// Long-lived token exchanged for new access tokens.
    Refresh,
}

impl TokenKind {
    /// Signing secret for this token kind.
    fn secret(self, config: &AuthConfig) -> &[u8] {
        match self {
            TokenKind::Access => config.access_secret.as_bytes(),
            TokenKind::Refresh => config.refresh_secret.as_bytes(),
        }
    }
}

/// Mint an HS256 token for `email` expiring `ttl` from now.
pub fn issue_token(
    email: &str,
    ttl: chrono::Duration,
    kind: TokenKind,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let exp = (chrono::Utc::now() + ttl).timestamp();
    let claims = Claims {
        email: email.to_string(),
        exp,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(kind.secret(config)),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

/// Validate a token against the secret for `kind` and return its [`Claims`].
///
/// Expiry is checked with the library's default 60-second leeway. An expired
/// token is reported as [`AuthError::TokenExpired`]; any other failure (bad
/// signature, wrong kind, garbage input) as [`AuthError::TokenInvalid`].
pub fn verify_token(
    token: &str,
    kind: TokenKind,
    config: &AuthConfig,
) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(kind.secret(config)),
        &Validation::default(), // HS256, validates exp
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::TokenInvalid,
    })?;
    Ok(token_data.claims)
}

/// Compute the SHA-256 hex digest of a refresh token.
///
/// Only this digest is persisted server-side; comparing it against the stored
/// value is what enforces single-active-session rotation.
pub fn hash_refresh_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
