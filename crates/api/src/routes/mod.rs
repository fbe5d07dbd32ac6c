pub mod auth;
pub mod categories;
pub mod health;
pub mod questions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Every route here requires a Bearer token; handlers take [`AuthUser`]
/// and make their own ownership and permission decisions.
///
/// ```text
/// /categories                                      list, create
/// /categories/{id}                                 delete (owner)
/// /categories/{id}/request-access                  request access
/// /categories/{id}/requests                        pending requests (owner)
/// /categories/{id}/requests/{request_id}/respond   approve / reject (owner)
///
/// /questions                                       list (?category_id=), create
/// /questions/{id}                                  update, delete
/// ```
///
/// [`AuthUser`]: crate::middleware::auth::AuthUser
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(questions::router())
}
