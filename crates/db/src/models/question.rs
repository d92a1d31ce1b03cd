//! Question entity model and DTOs.

use quizdeck_core::types::{DbId, Timestamp};
use serde::Deserialize;
use serde_json::Value;
use sqlx::FromRow;

/// Full question row from the `questions` table.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct Question {
    pub id: DbId,
    /// Join code of the owning test (FK to `tests.code`).
    pub test_code: String,
    pub question_text: String,
    /// JSONB array of `{id, text}` option objects.
    pub options: Value,
    /// JSONB array of correct option ids.
    pub correct_answers: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new question.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub test_code: String,
    pub question_text: String,
    pub options: Value,
    pub correct_answers: Value,
}
