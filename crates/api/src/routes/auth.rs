//! Public account routes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, users};
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST /signup       -> signup (public)
/// POST /login        -> login (public)
/// GET  /users        -> list_users (admin only)
/// GET  /users/{id}   -> get_user (self or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/users", get(users::list_users))
        .route("/users/{id}", get(users::get_user))
}
