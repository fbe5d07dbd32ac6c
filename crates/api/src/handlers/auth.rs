//! Handlers for signup and login.

use axum::extract::State;
use axum::Json;
use interview_prep_core::roles::Role;
use interview_prep_core::signup::SignupForm;
use interview_prep_db::models::user::{CreateUser, User, UserResponse};
use interview_prep_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

const DUPLICATE_ACCOUNT: &str = "Email or phone already exists";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for `POST /signup` and `POST /login`.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signup
///
/// Validate the form, create the account, and return it with a token.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(form): AppJson<SignupForm>,
) -> AppResult<Json<AuthResponse>> {
    let role = state
        .signup_rules
        .validate(&form)
        .map_err(AppError::validation)?;

    let phone = form.phone.trim().to_string();
    if UserRepo::email_or_phone_taken(&state.pool, &form.email, &phone).await? {
        return Err(AppError::BadRequest(DUPLICATE_ACCOUNT.into()));
    }

    let password_hash = hash_password(&form.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateUser {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: form.email,
        password_hash,
        phone,
        role: role.as_str().to_string(),
    };

    // A concurrent signup can still win the race past the pre-check.
    let user = UserRepo::create(&state.pool, &input).await.map_err(|e| {
        if interview_prep_db::is_unique_violation(&e, "uq_users_email")
            || interview_prep_db::is_unique_violation(&e, "uq_users_phone")
        {
            AppError::BadRequest(DUPLICATE_ACCOUNT.into())
        } else {
            AppError::Database(e)
        }
    })?;

    tracing::info!(user_id = user.id, role = %role, "User signed up");

    Ok(Json(issue(&state, user, role)?))
}

/// POST /login
///
/// Authenticate with email + password. Unknown email and wrong password
/// are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    let role: Role = user
        .role
        .parse()
        .map_err(AppError::InternalError)?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(issue(&state, user, role)?))
}

/// Sign a token for `user` and pair it with the public profile.
fn issue(state: &AppState, user: User, role: Role) -> AppResult<AuthResponse> {
    let token = generate_token(user.id, &user.email, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        token,
        user: user.into(),
    })
}
