//! Repository for the `questions` table.

use interview_prep_core::types::DbId;
use sqlx::PgPool;

use super::{permission_predicate, Guarded};
use crate::models::question::{CreateQuestion, Question, UpdateQuestion};

/// Column list for `questions` queries.
const COLUMNS: &str = "id, category_id, question, answer, context, difficulty, \
                       created_at, updated_at";

/// Provides question CRUD. Writes are gated on category permission.
pub struct QuestionRepo;

impl QuestionRepo {
    /// List questions newest first, optionally restricted to one category.
    pub async fn list(
        pool: &PgPool,
        category_id: Option<DbId>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE ($1::BIGINT IS NULL OR category_id = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a question if `requester_id` has permission on its category.
    ///
    /// Returns `None` when permission is missing, including when the
    /// category does not exist.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQuestion,
        requester_id: DbId,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (category_id, question, answer, context, difficulty)
             SELECT $1, $2, $3, $4, $5
             WHERE {}
             RETURNING {COLUMNS}",
            permission_predicate("$1", "$6")
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(input.category_id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.context)
            .bind(&input.difficulty)
            .bind(requester_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a question's text fields if `requester_id` has permission
    /// on its category.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
        requester_id: DbId,
    ) -> Result<Guarded<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions q SET
                question = $2,
                answer = $3,
                context = $4,
                difficulty = $5,
                updated_at = NOW()
             WHERE q.id = $1 AND {}
             RETURNING {COLUMNS}",
            permission_predicate("q.category_id", "$6")
        );
        let updated = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.context)
            .bind(&input.difficulty)
            .bind(requester_id)
            .fetch_optional(pool)
            .await?;

        match updated {
            Some(question) => Ok(Guarded::Applied(question)),
            None => Ok(Guarded::rejected(Self::exists(pool, id).await?)),
        }
    }

    /// Delete a question if `requester_id` has permission on its category.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        requester_id: DbId,
    ) -> Result<Guarded<()>, sqlx::Error> {
        let query = format!(
            "DELETE FROM questions q WHERE q.id = $1 AND {}",
            permission_predicate("q.category_id", "$2")
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(requester_id)
            .execute(pool)
            .await?;

        if result.rows_affected() > 0 {
            Ok(Guarded::Applied(()))
        } else {
            Ok(Guarded::rejected(Self::exists(pool, id).await?))
        }
    }

    async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM questions WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
