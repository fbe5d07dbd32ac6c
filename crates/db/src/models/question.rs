//! Question/answer models and DTOs.

use interview_prep_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub category_id: DbId,
    pub question: String,
    pub answer: String,
    pub context: String,
    pub difficulty: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a question.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub category_id: DbId,
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub difficulty: String,
}

/// DTO for updating a question. Every field is overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuestion {
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub difficulty: String,
}
