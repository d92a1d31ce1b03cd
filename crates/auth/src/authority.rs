//! The credential and token authority: signup, login, and refresh flows.

use std::sync::Arc;

use quizdeck_db::models::user::{CreateUser, User};
use quizdeck_db::repositories::UserRepo;
use quizdeck_db::DbPool;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password::{hash_password, validate_password_strength, verify_password};
use crate::tokens::{hash_refresh_token, issue_token, verify_token, TokenKind};

/// Tokens and user record returned by a successful [`Authority::login`].
#[derive(Debug)]
pub struct LoginOutcome {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// Handle over the credential store and signing configuration.
///
/// Cheap to clone; shared across request handlers. All operations acquire a
/// pool connection per statement, so a single handle serves concurrent
/// requests without interior locking.
#[derive(Clone)]
pub struct Authority {
    pool: DbPool,
    config: Arc<AuthConfig>,
}

impl Authority {
    pub fn new(pool: DbPool, config: Arc<AuthConfig>) -> Self {
        Self { pool, config }
    }

    /// Check an email/password pair against the credential store.
    ///
    /// Read-only. [`AuthError::NotFound`] and [`AuthError::InvalidCredentials`]
    /// stay distinct here; the HTTP layer collapses them into one response so
    /// callers cannot probe which emails are registered.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let user = UserRepo::find_by_email(&self.pool, email)
            .await?
            .ok_or(AuthError::NotFound)?;

        let password_valid = verify_password(password, &user.password_hash)
            .map_err(|e| AuthError::Internal(format!("Password verification error: {e}")))?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Authenticate and mint one access and one refresh token.
    ///
    /// The refresh token's SHA-256 digest overwrites whatever digest the
    /// record held before, so earlier refresh tokens stop working the moment
    /// this login succeeds.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        // 1. Verify credentials.
        let user = self.verify_credentials(email, password).await?;

        // 2. Mint both tokens for the verified email.
        let access_token = issue_token(
            &user.email,
            self.config.access_ttl(),
            TokenKind::Access,
            &self.config,
        )?;
        let refresh_token = issue_token(
            &user.email,
            self.config.refresh_ttl(),
            TokenKind::Refresh,
            &self.config,
        )?;

        // 3. Pin the new refresh token on the credential record.
        let token_hash = hash_refresh_token(&refresh_token);
        UserRepo::set_refresh_token_hash(&self.pool, &user.email, &token_hash).await?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginOutcome {
            access_token,
            refresh_token,
            user,
        })
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// The token must verify against the refresh secret AND match the digest
    /// pinned on the credential record. No store write happens here: the
    /// presented refresh token stays valid until its own expiry or the next
    /// login, whichever comes first.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        // 1. Signature, structure, and expiry checks.
        let claims = verify_token(refresh_token, TokenKind::Refresh, &self.config)?;

        // 2. The credential record must still exist.
        let user = UserRepo::find_by_email(&self.pool, &claims.email)
            .await?
            .ok_or(AuthError::TokenInvalid)?;

        // 3. Rotation check: only the most recently issued refresh token is pinned.
        let presented_hash = hash_refresh_token(refresh_token);
        if user.refresh_token_hash.as_deref() != Some(presented_hash.as_str()) {
            tracing::warn!(user_id = user.id, "Superseded refresh token presented");
            return Err(AuthError::TokenInvalid);
        }

        // 4. Mint a fresh access token.
        issue_token(
            &user.email,
            self.config.access_ttl(),
            TokenKind::Access,
            &self.config,
        )
    }

    /// Register a new credential record.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        // 1. Password policy.
        validate_password_strength(password).map_err(AuthError::Validation)?;

        // 2. Existence pre-check; uq_users_email still catches concurrent signups.
        if UserRepo::email_exists(&self.pool, email).await? {
            return Err(AuthError::DuplicateEmail);
        }

        // 3. Hash and insert. refresh_token_hash starts NULL until the first login.
        let password_hash = hash_password(password)
            .map_err(|e| AuthError::Internal(format!("Failed to hash password: {e}")))?;

        let input = CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        };
        let user = UserRepo::create(&self.pool, &input).await?;

        tracing::info!(user_id = user.id, "User registered");

        Ok(user)
    }
}
