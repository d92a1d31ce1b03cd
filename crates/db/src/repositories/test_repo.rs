//! Repository for the `tests` table.

use sqlx::PgPool;

use crate::models::test::{CreateTest, Test};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subject, topic, code, created_at, updated_at";

/// Provides CRUD operations for tests.
pub struct TestRepo;

impl TestRepo {
    /// Insert a new test, returning the created row.
    ///
    /// A duplicate join code violates `uq_tests_code` (PostgreSQL 23505).
    pub async fn create(pool: &PgPool, input: &CreateTest) -> Result<Test, sqlx::Error> {
        let query = format!(
            "INSERT INTO tests (subject, topic, code)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Test>(&query)
            .bind(&input.subject)
            .bind(&input.topic)
            .bind(&input.code)
            .fetch_one(pool)
            .await
    }

    /// Find a test by its join code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Test>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tests WHERE code = $1");
        sqlx::query_as::<_, Test>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Whether a test with the given join code exists.
    pub async fn exists(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM tests WHERE code = $1)")
            .bind(code)
            .fetch_one(pool)
            .await?;
        Ok(result.0)
    }
}
