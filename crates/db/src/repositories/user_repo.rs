//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, password_hash, refresh_token_hash, created_at, updated_at";

/// Provides credential-record operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A duplicate email violates `uq_users_email` (PostgreSQL 23505).
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Whether a user with the given email exists.
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(pool)
                .await?;
        Ok(result.0)
    }

    /// Replace the stored refresh-token hash for a user.
    ///
    /// Returns `true` if a row was updated. Unconditional overwrite:
    /// concurrent logins resolve last-write-wins.
    pub async fn set_refresh_token_hash(
        pool: &PgPool,
        email: &str,
        token_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET refresh_token_hash = $2 WHERE email = $1")
            .bind(email)
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
