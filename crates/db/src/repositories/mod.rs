//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Writes that depend on ownership
//! or permission are single conditional statements; a follow-up read only
//! classifies why a write matched no rows.

pub mod category_repo;
pub mod permission_request_repo;
pub mod question_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use permission_request_repo::{PermissionRequestRepo, RequestAccessOutcome};
pub use question_repo::QuestionRepo;
pub use user_repo::UserRepo;

/// Outcome of a write gated on ownership or category permission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    /// The write matched and was applied.
    Applied(T),
    /// The target row does not exist.
    NotFound,
    /// The target exists but the caller may not act on it.
    Forbidden,
}

impl<T> Guarded<T> {
    /// Classify an empty conditional write by whether the target exists.
    pub(crate) fn rejected(target_exists: bool) -> Self {
        if target_exists {
            Guarded::Forbidden
        } else {
            Guarded::NotFound
        }
    }
}

/// SQL condition that holds when `user` may edit questions in `category`.
///
/// Both arguments are SQL expressions (a column or a `$n` placeholder).
pub(crate) fn permission_predicate(category: &str, user: &str) -> String {
    format!(
        "(EXISTS (SELECT 1 FROM categories pc \
                  WHERE pc.id = {category} AND pc.user_id = {user}) \
          OR EXISTS (SELECT 1 FROM permission_requests pp \
                     WHERE pp.category_id = {category} AND pp.user_id = {user} \
                       AND pp.status = 'APPROVED'))"
    )
}
