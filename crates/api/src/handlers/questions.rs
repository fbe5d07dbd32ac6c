//! Handlers for the question catalog.
//!
//! Reading is open to any authenticated user. Writing requires permission
//! on the question's category (owner or approved request).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use interview_prep_core::access::validate_question;
use interview_prep_core::types::DbId;
use interview_prep_db::models::question::{CreateQuestion, Question, UpdateQuestion};
use interview_prep_db::repositories::QuestionRepo;
use serde::Deserialize;

use super::resolve_guarded;
use crate::error::{AppError, AppResult};
use crate::extract::{empty_as_none, AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

const NO_PERMISSION: &str = "You do not have permission to modify questions in this category";

/// Query parameters for `GET /api/questions`.
///
/// An empty `category_id` means no filter.
#[derive(Debug, Deserialize)]
pub struct QuestionListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category_id: Option<DbId>,
}

/// GET /api/questions?category_id=
pub async fn list_questions(
    _auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<QuestionListParams>,
) -> AppResult<Json<Vec<Question>>> {
    let questions = QuestionRepo::list(&state.pool, params.category_id).await?;
    Ok(Json(questions))
}

/// POST /api/questions
pub async fn create_question(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateQuestion>,
) -> AppResult<(StatusCode, Json<Question>)> {
    validate_question(&input.question, Some(input.difficulty.as_str()))
        .map_err(AppError::validation)?;

    let question = QuestionRepo::create(&state.pool, &input, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::forbidden("You do not have permission to add questions to this category")
        })?;

    tracing::info!(
        question_id = question.id,
        category_id = question.category_id,
        user_id = auth.user_id,
        "Question created",
    );

    Ok((StatusCode::CREATED, Json(question)))
}

/// PUT /api/questions/{id}
///
/// Overwrites question, answer, context and difficulty.
pub async fn update_question(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateQuestion>,
) -> AppResult<Json<Question>> {
    validate_question(&input.question, Some(input.difficulty.as_str()))
        .map_err(AppError::validation)?;

    let outcome = QuestionRepo::update(&state.pool, question_id, &input, auth.user_id).await?;
    let question = resolve_guarded(outcome, "Question", question_id, NO_PERMISSION)?;

    tracing::info!(question_id, user_id = auth.user_id, "Question updated");

    Ok(Json(question))
}

/// DELETE /api/questions/{id}
pub async fn delete_question(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let outcome = QuestionRepo::delete(&state.pool, question_id, auth.user_id).await?;
    resolve_guarded(outcome, "Question", question_id, NO_PERMISSION)?;

    tracing::info!(question_id, user_id = auth.user_id, "Question deleted");

    Ok(Json(MessageResponse::new("deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<QuestionListParams, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[test]
    fn test_missing_and_empty_category_mean_no_filter() {
        assert_eq!(parse("{}").unwrap().category_id, None);
        assert_eq!(parse(r#"{"category_id": ""}"#).unwrap().category_id, None);
    }

    #[test]
    fn test_numeric_category_is_parsed() {
        assert_eq!(parse(r#"{"category_id": "42"}"#).unwrap().category_id, Some(42));
    }

    #[test]
    fn test_non_numeric_category_is_rejected() {
        assert!(parse(r#"{"category_id": "abc"}"#).is_err());
    }
}
