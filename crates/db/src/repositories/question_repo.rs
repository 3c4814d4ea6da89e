//! Repository for the `questions` table and its options.

use std::collections::HashMap;

use sqlx::{PgExecutor, PgPool};
use survey_core::types::DbId;

use super::response_option_repo::{ResponseOptionRepo, COLUMNS as OPTION_COLUMNS};
use crate::models::question::{CreateQuestion, Question, QuestionWithOptions, ResponseOption};

/// Column list for the `questions` table.
const COLUMNS: &str = "id, text, question_type, created_at";

/// Provides create and read operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a question and its options in one transaction.
    ///
    /// Options are skipped for free-text questions. If any statement fails
    /// (e.g. `uq_questions_text`), the transaction is dropped and nothing is
    /// kept.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQuestion,
    ) -> Result<QuestionWithOptions, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO questions (text, question_type) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&insert_query)
            .bind(&input.text)
            .bind(input.question_type.as_str())
            .fetch_one(&mut *tx)
            .await?;

        let option_query = format!(
            "INSERT INTO response_options (question_id, text) VALUES ($1, $2) \
             RETURNING {OPTION_COLUMNS}"
        );
        let mut options = Vec::with_capacity(input.effective_options().len());
        for option in input.effective_options() {
            let row = sqlx::query_as::<_, ResponseOption>(&option_query)
                .bind(question.id)
                .bind(&option.text)
                .fetch_one(&mut *tx)
                .await?;
            options.push(row);
        }

        tx.commit().await?;
        tracing::debug!(question_id = question.id, options = options.len(), "Question inserted");
        Ok(QuestionWithOptions { question, options })
    }

    /// Find a question by internal ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a question by ID, enriched with its options.
    pub async fn find_by_id_with_options(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QuestionWithOptions>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(question) => {
                let options = ResponseOptionRepo::list_by_question(pool, question.id).await?;
                Ok(Some(QuestionWithOptions { question, options }))
            }
            None => Ok(None),
        }
    }

    /// List one page of questions ordered by id.
    ///
    /// `limit` and `offset` are expected to be clamped by the caller.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Question>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List one page of questions with their options.
    ///
    /// Options for the whole page are fetched in a single query.
    pub async fn list_with_options(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<QuestionWithOptions>, sqlx::Error> {
        let questions = Self::list(pool, limit, offset).await?;
        let ids: Vec<DbId> = questions.iter().map(|q| q.id).collect();

        let mut by_question: HashMap<DbId, Vec<ResponseOption>> = HashMap::new();
        for option in ResponseOptionRepo::list_by_questions(pool, &ids).await? {
            by_question.entry(option.question_id).or_default().push(option);
        }

        Ok(questions
            .into_iter()
            .map(|question| {
                let options = by_question.remove(&question.id).unwrap_or_default();
                QuestionWithOptions { question, options }
            })
            .collect())
    }
}
