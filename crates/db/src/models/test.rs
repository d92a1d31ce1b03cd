//! Test (quiz) entity model and DTOs.

use quizdeck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full test row from the `tests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Test {
    pub id: DbId,
    pub subject: String,
    pub topic: String,
    /// Join code handed to test takers (4-8 ASCII digits, unique).
    pub code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new test.
#[derive(Debug, Deserialize)]
pub struct CreateTest {
    pub subject: String,
    pub topic: String,
    pub code: String,
}
