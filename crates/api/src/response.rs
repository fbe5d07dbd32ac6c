//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body for actions that return no entity.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
