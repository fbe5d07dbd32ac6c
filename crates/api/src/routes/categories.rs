//! Route definitions for categories and permission requests.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET, POST  /categories                                       list, create
/// DELETE     /categories/{id}                                  delete (owner)
/// POST       /categories/{id}/request-access                   request_access
/// GET        /categories/{id}/requests                         list_requests (owner)
/// POST       /categories/{id}/requests/{request_id}/respond    respond_to_request (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/categories/{id}", delete(categories::delete_category))
        .route(
            "/categories/{id}/request-access",
            post(categories::request_access),
        )
        .route("/categories/{id}/requests", get(categories::list_requests))
        .route(
            "/categories/{id}/requests/{request_id}/respond",
            post(categories::respond_to_request),
        )
}
