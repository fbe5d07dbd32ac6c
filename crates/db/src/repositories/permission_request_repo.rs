//! Repository for the `permission_requests` table.

use interview_prep_core::access::{PermissionStatus, STATUS_PENDING};
use interview_prep_core::types::DbId;
use sqlx::PgPool;

use super::{CategoryRepo, Guarded};
use crate::models::permission_request::{PendingRequestRow, PermissionRequest, RequestView};

/// Column list for `permission_requests` queries.
const COLUMNS: &str = "id, category_id, user_id, status, created_at, updated_at";

/// Result of asking for access to a category.
#[derive(Debug, Clone)]
pub enum RequestAccessOutcome {
    /// A new `PENDING` request was stored.
    Created(PermissionRequest),
    /// The category does not exist.
    CategoryNotFound,
    /// The requester owns the category and needs no request.
    OwnCategory,
    /// A request for this (category, user) pair already exists.
    AlreadyRequested,
}

/// Provides the permission-request workflow queries.
pub struct PermissionRequestRepo;

impl PermissionRequestRepo {
    /// Store a `PENDING` request from `user_id` for `category_id`.
    ///
    /// Insert-if-absent against `uq_permission_requests_category_user`; an
    /// existing request of any status is left untouched.
    pub async fn create(
        pool: &PgPool,
        category_id: DbId,
        user_id: DbId,
    ) -> Result<RequestAccessOutcome, sqlx::Error> {
        let query = format!(
            "INSERT INTO permission_requests (category_id, user_id)
             SELECT c.id, $2 FROM categories c
             WHERE c.id = $1 AND c.user_id <> $2
             ON CONFLICT ON CONSTRAINT uq_permission_requests_category_user DO NOTHING
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, PermissionRequest>(&query)
            .bind(category_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        if let Some(request) = created {
            return Ok(RequestAccessOutcome::Created(request));
        }

        Ok(match CategoryRepo::find_owner(pool, category_id).await? {
            None => RequestAccessOutcome::CategoryNotFound,
            Some(owner) if owner == user_id => RequestAccessOutcome::OwnCategory,
            Some(_) => RequestAccessOutcome::AlreadyRequested,
        })
    }

    /// Find `user_id`'s request for `category_id`, whatever its status.
    pub async fn find_for_user(
        pool: &PgPool,
        category_id: DbId,
        user_id: DbId,
    ) -> Result<Option<PermissionRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM permission_requests WHERE category_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, PermissionRequest>(&query)
            .bind(category_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List pending requests for a category, visible only to its owner.
    pub async fn list_pending(
        pool: &PgPool,
        category_id: DbId,
        requester_id: DbId,
    ) -> Result<Guarded<Vec<RequestView>>, sqlx::Error> {
        match CategoryRepo::find_owner(pool, category_id).await? {
            None => return Ok(Guarded::NotFound),
            Some(owner) if owner != requester_id => return Ok(Guarded::Forbidden),
            Some(_) => {}
        }

        let rows = sqlx::query_as::<_, PendingRequestRow>(
            "SELECT p.id, p.user_id, u.first_name, u.last_name, u.email, p.status, p.created_at
             FROM permission_requests p
             JOIN users u ON u.id = p.user_id
             WHERE p.category_id = $1 AND p.status = $2
             ORDER BY p.created_at, p.id",
        )
        .bind(category_id)
        .bind(STATUS_PENDING)
        .fetch_all(pool)
        .await?;

        Ok(Guarded::Applied(
            rows.into_iter().map(RequestView::from).collect(),
        ))
    }

    /// Set the status of a request in `category_id` if `owner_id` owns it.
    ///
    /// Re-deciding an already decided request overwrites the status.
    pub async fn respond(
        pool: &PgPool,
        category_id: DbId,
        request_id: DbId,
        owner_id: DbId,
        status: PermissionStatus,
    ) -> Result<Guarded<PermissionRequest>, sqlx::Error> {
        let updated = sqlx::query_as::<_, PermissionRequest>(
            "UPDATE permission_requests p SET status = $4
             FROM categories c
             WHERE p.id = $1 AND p.category_id = $2
               AND c.id = p.category_id AND c.user_id = $3
             RETURNING p.id, p.category_id, p.user_id, p.status, p.created_at, p.updated_at",
        )
        .bind(request_id)
        .bind(category_id)
        .bind(owner_id)
        .bind(status.as_str())
        .fetch_optional(pool)
        .await?;

        if let Some(request) = updated {
            return Ok(Guarded::Applied(request));
        }

        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM permission_requests WHERE id = $1 AND category_id = $2)",
        )
        .bind(request_id)
        .bind(category_id)
        .fetch_one(pool)
        .await?;
        Ok(Guarded::rejected(exists))
    }
}
