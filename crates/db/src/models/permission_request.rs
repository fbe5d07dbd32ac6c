//! Permission request models.

use interview_prep_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `permission_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PermissionRequest {
    pub id: DbId,
    pub category_id: DbId,
    pub user_id: DbId,
    /// `PENDING`, `APPROVED` or `REJECTED`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A pending request joined with the requesting user's contact details.
#[derive(Debug, Clone, FromRow)]
pub struct PendingRequestRow {
    pub id: DbId,
    pub user_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// The requesting user as shown to the category owner.
#[derive(Debug, Clone, Serialize)]
pub struct Requester {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A permission request as listed for the category owner.
#[derive(Debug, Clone, Serialize)]
pub struct RequestView {
    pub id: DbId,
    pub user: Requester,
    pub status: String,
    pub created_at: Timestamp,
}

impl From<PendingRequestRow> for RequestView {
    fn from(row: PendingRequestRow) -> Self {
        Self {
            id: row.id,
            user: Requester {
                id: row.user_id,
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
            },
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// Request body for the respond endpoint: `APPROVED` or `REJECTED`.
#[derive(Debug, Clone, Deserialize)]
pub struct RespondToRequest {
    pub status: String,
}
