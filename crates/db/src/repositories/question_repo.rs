//! Repository for the `questions` table.

use sqlx::PgPool;

use crate::models::question::{CreateQuestion, Question};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, test_code, question_text, options, correct_answers, created_at, updated_at";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a single question, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (test_code, question_text, options, correct_answers)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.test_code)
            .bind(&input.question_text)
            .bind(&input.options)
            .bind(&input.correct_answers)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch of questions in one transaction.
    ///
    /// All-or-nothing: a failure on any row rolls the whole batch back,
    /// so a generated question set is never half-stored.
    pub async fn create_batch(
        pool: &PgPool,
        inputs: &[CreateQuestion],
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (test_code, question_text, options, correct_answers)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let question = sqlx::query_as::<_, Question>(&query)
                .bind(&input.test_code)
                .bind(&input.question_text)
                .bind(&input.options)
                .bind(&input.correct_answers)
                .fetch_one(&mut *tx)
                .await?;
            created.push(question);
        }
        tx.commit().await?;

        Ok(created)
    }

    /// List all questions for a test, oldest first.
    pub async fn list_by_test_code(
        pool: &PgPool,
        test_code: &str,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE test_code = $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(test_code)
            .fetch_all(pool)
            .await
    }
}
