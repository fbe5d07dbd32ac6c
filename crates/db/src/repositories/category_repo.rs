//! Repository for the `categories` table.

use interview_prep_core::types::DbId;
use sqlx::PgPool;

use super::Guarded;
use crate::models::category::{Category, CategoryListingRow, CategoryView};

/// Creator display name, `'Unknown'` if the owner row is gone.
const CREATOR_NAME: &str = "COALESCE(u.first_name || ' ' || u.last_name, 'Unknown')";

/// Provides category creation, listing, and owner-gated deletion.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category owned by `owner_id`.
    ///
    /// Returns `None` if the name is already taken. The insert and the
    /// uniqueness check are one statement against `uq_categories_name`.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        owner_id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "WITH inserted AS (
                 INSERT INTO categories (name, user_id)
                 VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_categories_name DO NOTHING
                 RETURNING id, name, user_id, created_at
             )
             SELECT i.id, i.name, i.user_id, {CREATOR_NAME} AS creator_name, i.created_at
             FROM inserted i
             LEFT JOIN users u ON u.id = i.user_id"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Return the owner of a category, or `None` if it does not exist.
    pub async fn find_owner(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT user_id FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(owner,)| owner))
    }

    /// List every category, ordered by name, as seen by `requester_id`.
    ///
    /// Only the requester's own permission request is joined, so other
    /// users' request statuses never appear in the result.
    pub async fn list_for_user(
        pool: &PgPool,
        requester_id: DbId,
    ) -> Result<Vec<CategoryView>, sqlx::Error> {
        let query = format!(
            "SELECT c.id, c.name, c.user_id, {CREATOR_NAME} AS creator_name, c.created_at,
                    pr.status AS request_status
             FROM categories c
             LEFT JOIN users u ON u.id = c.user_id
             LEFT JOIN permission_requests pr
                    ON pr.category_id = c.id AND pr.user_id = $1
             ORDER BY c.name"
        );
        let rows = sqlx::query_as::<_, CategoryListingRow>(&query)
            .bind(requester_id)
            .fetch_all(pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| CategoryView::for_requester(row, requester_id))
            .collect())
    }

    /// Delete a category if `requester_id` owns it.
    ///
    /// Questions and permission requests go with it via `ON DELETE CASCADE`.
    pub async fn delete_owned(
        pool: &PgPool,
        id: DbId,
        requester_id: DbId,
    ) -> Result<Guarded<()>, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(requester_id)
            .execute(pool)
            .await?;
        if result.rows_affected() > 0 {
            return Ok(Guarded::Applied(()));
        }

        let exists = Self::find_owner(pool, id).await?.is_some();
        Ok(Guarded::rejected(exists))
    }
}
