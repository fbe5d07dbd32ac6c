//! Handlers for categories and the permission-request workflow.
//!
//! Category owners approve or reject other users' requests to contribute
//! questions. Every authorization decision is made inside the repository's
//! write statement; handlers only translate the outcome.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use interview_prep_core::access::{validate_category_name, Decision};
use interview_prep_core::error::CoreError;
use interview_prep_core::types::DbId;
use interview_prep_db::models::category::{Category, CategoryView, CreateCategory};
use interview_prep_db::models::permission_request::{RequestView, RespondToRequest};
use interview_prep_db::repositories::{
    CategoryRepo, PermissionRequestRepo, RequestAccessOutcome,
};

use super::resolve_guarded;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/categories
///
/// Every category, annotated with the caller's own access state.
pub async fn list_categories(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoryView>>> {
    let categories = CategoryRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(categories))
}

/// POST /api/categories
///
/// Create a category owned by the caller. Names are unique.
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    validate_category_name(&input.name).map_err(AppError::validation)?;

    let category = CategoryRepo::create(&state.pool, input.name.trim(), auth.user_id)
        .await?
        .ok_or_else(|| AppError::conflict("Category name already exists"))?;

    tracing::info!(
        category_id = category.id,
        user_id = auth.user_id,
        "Category created",
    );

    Ok((StatusCode::CREATED, Json(category)))
}

/// DELETE /api/categories/{id}
///
/// Only the owner may delete. Questions and requests are removed with it.
pub async fn delete_category(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let outcome = CategoryRepo::delete_owned(&state.pool, category_id, auth.user_id).await?;
    resolve_guarded(
        outcome,
        "Category",
        category_id,
        "You can only delete categories you created",
    )?;

    tracing::info!(category_id, user_id = auth.user_id, "Category deleted");

    Ok(Json(MessageResponse::new("deleted successfully")))
}

// ---------------------------------------------------------------------------
// Permission requests
// ---------------------------------------------------------------------------

/// POST /api/categories/{id}/request-access
///
/// Ask the owner for permission to contribute. One request per user per
/// category, whatever its status.
pub async fn request_access(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    match PermissionRequestRepo::create(&state.pool, category_id, auth.user_id).await? {
        RequestAccessOutcome::Created(request) => {
            tracing::info!(
                request_id = request.id,
                category_id,
                user_id = auth.user_id,
                "Access requested",
            );
            Ok((StatusCode::CREATED, Json(MessageResponse::new("Request sent"))))
        }
        RequestAccessOutcome::CategoryNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        })),
        RequestAccessOutcome::OwnCategory => {
            Err(AppError::conflict("You already own this category"))
        }
        RequestAccessOutcome::AlreadyRequested => Err(AppError::conflict("Request already exists")),
    }
}

/// GET /api/categories/{id}/requests
///
/// Pending requests for a category, oldest first. Owner only.
pub async fn list_requests(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
) -> AppResult<Json<Vec<RequestView>>> {
    let outcome = PermissionRequestRepo::list_pending(&state.pool, category_id, auth.user_id)
        .await?;
    let requests = resolve_guarded(
        outcome,
        "Category",
        category_id,
        "Only owner can view requests",
    )?;
    Ok(Json(requests))
}

/// POST /api/categories/{id}/requests/{request_id}/respond
///
/// Approve or reject a request. Owner only; re-deciding overwrites.
pub async fn respond_to_request(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((category_id, request_id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<RespondToRequest>,
) -> AppResult<Json<MessageResponse>> {
    let decision: Decision = input.status.parse().map_err(AppError::validation)?;
    let status = decision.resulting_status();

    let outcome = PermissionRequestRepo::respond(
        &state.pool,
        category_id,
        request_id,
        auth.user_id,
        status,
    )
    .await?;
    let request = resolve_guarded(outcome, "Permission request", request_id, "Not authorized")?;

    tracing::info!(
        request_id,
        category_id,
        requester_id = request.user_id,
        status = %status,
        "Permission request decided",
    );

    Ok(Json(MessageResponse::new("Status updated")))
}
