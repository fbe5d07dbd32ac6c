//! Route definitions for the question catalog.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET, POST     /questions        list (?category_id=), create
/// PUT, DELETE   /questions/{id}   update, delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/questions/{id}",
            put(questions::update_question).delete(questions::delete_question),
        )
}
