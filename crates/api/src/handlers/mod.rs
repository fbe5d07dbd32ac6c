//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `interview_prep_db`
//! and map errors via [`AppError`].

pub mod auth;
pub mod categories;
pub mod questions;
pub mod users;

use interview_prep_core::error::CoreError;
use interview_prep_core::types::DbId;
use interview_prep_db::repositories::Guarded;

use crate::error::{AppError, AppResult};

/// Turn the outcome of an ownership- or permission-gated write into a
/// handler result: 404 when the target is gone, 403 with `forbidden`
/// otherwise.
fn resolve_guarded<T>(
    outcome: Guarded<T>,
    entity: &'static str,
    id: DbId,
    forbidden: &str,
) -> AppResult<T> {
    match outcome {
        Guarded::Applied(value) => Ok(value),
        Guarded::NotFound => Err(AppError::Core(CoreError::NotFound { entity, id })),
        Guarded::Forbidden => Err(AppError::forbidden(forbidden)),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_applied_passes_value_through() {
        assert_eq!(
            resolve_guarded(Guarded::Applied(5), "Question", 1, "no").unwrap(),
            5
        );
    }

    #[test]
    fn test_not_found_names_entity() {
        let err = resolve_guarded::<()>(Guarded::NotFound, "Question", 9, "no").unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::NotFound {
                entity: "Question",
                id: 9
            })
        );
    }

    #[test]
    fn test_forbidden_carries_message() {
        let err = resolve_guarded::<()>(Guarded::Forbidden, "Category", 1, "Not authorized")
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Forbidden(msg)) if msg == "Not authorized");
    }
}
