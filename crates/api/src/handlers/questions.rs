//! Handlers for questions nested under a test.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use quizdeck_core::error::CoreError;
use quizdeck_core::quiz::{validate_question, QuestionOption};
use quizdeck_db::models::question::{CreateQuestion, Question};
use quizdeck_db::repositories::{QuestionRepo, TestRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /tests/{code}/questions`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddQuestionRequest {
    #[validate(length(min = 1, message = "Question text must not be empty"))]
    pub question_text: String,
    pub options: Vec<QuestionOption>,
    pub correct_answers: Vec<i32>,
}

/// GET /tests/{code}/questions
///
/// List a test's questions, oldest first. An unknown test code is a 404; a
/// known test with no questions is an empty 200 list.
pub async fn list_questions(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Vec<Question>>> {
    if !TestRepo::exists(&state.pool, &code).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "test",
            key: code,
        }));
    }

    let questions = QuestionRepo::list_by_test_code(&state.pool, &code).await?;
    Ok(Json(questions))
}

/// POST /tests/{code}/questions
///
/// Add one question to an existing test. Requires a Bearer access token.
pub async fn add_question(
    State(state): State<AppState>,
    user: AuthUser,
    Path(code): Path<String>,
    Json(input): Json<AddQuestionRequest>,
) -> AppResult<(StatusCode, Json<Question>)> {
    // 1. Boundary validation: text shape plus option/answer consistency.
    input.validate()?;
    validate_question(&input.options, &input.correct_answers)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // 2. The parent test must exist.
    if !TestRepo::exists(&state.pool, &code).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "test",
            key: code,
        }));
    }

    // 3. Insert.
    let question = QuestionRepo::create(
        &state.pool,
        &CreateQuestion {
            test_code: code,
            question_text: input.question_text,
            options: serde_json::to_value(&input.options)
                .map_err(|e| AppError::InternalError(format!("Failed to encode options: {e}")))?,
            correct_answers: serde_json::to_value(&input.correct_answers)
                .map_err(|e| AppError::InternalError(format!("Failed to encode answers: {e}")))?,
        },
    )
    .await?;

    tracing::info!(user = %user.email, test_code = %question.test_code, "Question added");

    Ok((StatusCode::CREATED, Json(question)))
}
