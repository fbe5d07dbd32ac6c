//! Category models and the per-requester listing view.

use interview_prep_core::access::{has_permission, PermissionStatus};
use interview_prep_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category joined with its creator's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    /// Owner (creator) of the category.
    pub user_id: DbId,
    pub creator_name: String,
    pub created_at: Timestamp,
}

/// Row shape of the listing query: a category plus the requester's own
/// permission request status, if any.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryListingRow {
    pub id: DbId,
    pub name: String,
    pub user_id: DbId,
    pub creator_name: String,
    pub created_at: Timestamp,
    pub request_status: Option<String>,
}

/// A category as seen by one requester.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub id: DbId,
    pub name: String,
    pub user_id: DbId,
    pub creator_name: String,
    pub has_permission: bool,
    /// The requester's own request status, or `""` when none exists.
    pub request_status: String,
    pub created_at: Timestamp,
}

impl CategoryView {
    /// Project a listing row for `requester_id`.
    pub fn for_requester(row: CategoryListingRow, requester_id: DbId) -> Self {
        let status = row
            .request_status
            .as_deref()
            .and_then(|s| s.parse::<PermissionStatus>().ok());

        Self {
            has_permission: has_permission(row.user_id, requester_id, status),
            request_status: row.request_status.unwrap_or_default(),
            id: row.id,
            name: row.name,
            user_id: row.user_id,
            creator_name: row.creator_name,
            created_at: row.created_at,
        }
    }
}

/// DTO for creating a category. The owner comes from the authenticated
/// principal, never from the body.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(owner: DbId, status: Option<&str>) -> CategoryListingRow {
        CategoryListingRow {
            id: 10,
            name: "Arrays".into(),
            user_id: owner,
            creator_name: "Ada Lovelace".into(),
            created_at: chrono::Utc::now(),
            request_status: status.map(str::to_string),
        }
    }

    #[test]
    fn test_owner_view_has_permission_without_request() {
        let view = CategoryView::for_requester(row(1, None), 1);
        assert!(view.has_permission);
        assert_eq!(view.request_status, "");
    }

    #[test]
    fn test_pending_requester_view() {
        let view = CategoryView::for_requester(row(1, Some("PENDING")), 2);
        assert!(!view.has_permission);
        assert_eq!(view.request_status, "PENDING");
    }

    #[test]
    fn test_approved_requester_view() {
        let view = CategoryView::for_requester(row(1, Some("APPROVED")), 2);
        assert!(view.has_permission);
        assert_eq!(view.request_status, "APPROVED");
    }
}
