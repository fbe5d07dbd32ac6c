//! Handlers for the user directory.

use axum::extract::State;
use axum::Json;
use interview_prep_core::error::CoreError;
use interview_prep_core::types::DbId;
use interview_prep_db::models::user::UserResponse;
use interview_prep_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /users
///
/// List every account. Admin only.
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
///
/// A user may read their own profile; admins may read any.
pub async fn get_user(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<UserResponse>> {
    if !auth.can_view_user(id) {
        return Err(AppError::forbidden("Access denied"));
    }

    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(user.into()))
}
