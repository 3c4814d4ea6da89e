//! Repository for the `response_options` table.

use sqlx::{PgExecutor, PgPool};
use survey_core::types::DbId;

use crate::models::question::ResponseOption;

pub(crate) const COLUMNS: &str = "id, question_id, text, created_at";

/// Read access to response options. Options are inserted by
/// [`QuestionRepo::create`](super::QuestionRepo::create) only.
pub struct ResponseOptionRepo;

impl ResponseOptionRepo {
    /// Find an option by internal ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<ResponseOption>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM response_options WHERE id = $1");
        sqlx::query_as::<_, ResponseOption>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List the options of one question in insertion order.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<ResponseOption>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM response_options WHERE question_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, ResponseOption>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// List the options of several questions at once, ordered by question
    /// then option id.
    pub async fn list_by_questions(
        pool: &PgPool,
        question_ids: &[DbId],
    ) -> Result<Vec<ResponseOption>, sqlx::Error> {
        if question_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM response_options \
             WHERE question_id = ANY($1) \
             ORDER BY question_id, id"
        );
        sqlx::query_as::<_, ResponseOption>(&query)
            .bind(question_ids)
            .fetch_all(pool)
            .await
    }
}
