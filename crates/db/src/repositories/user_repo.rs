//! Repository for the `users` table.

use interview_prep_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, password_hash, phone, role, \
                       created_at, updated_at";

/// Provides identity lookups and inserts.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with a unique violation on `uq_users_email` / `uq_users_phone`
    /// when a concurrent signup won the race past the pre-check.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (first_name, last_name, email, password_hash, phone, role)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.phone)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Whether any user already holds this email or phone number.
    pub async fn email_or_phone_taken(
        pool: &PgPool,
        email: &str,
        phone: &str,
    ) -> Result<bool, sqlx::Error> {
        let (taken,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1 OR phone = $2)")
                .bind(email)
                .bind(phone)
                .fetch_one(pool)
                .await?;
        Ok(taken)
    }

    /// List all users ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }
}
