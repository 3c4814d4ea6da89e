//! Repository for the `respondents` table.

use sqlx::{PgExecutor, PgPool};
use survey_core::types::DbId;

use crate::models::respondent::{CreateRespondent, Respondent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, email, role, other_role, is_seedling, \
                       time_in_seedbed, created_at";

/// Provides create and lookup operations for respondents.
pub struct RespondentRepo;

impl RespondentRepo {
    /// Insert a new respondent, returning the created row.
    ///
    /// A duplicate email violates `uq_respondents_email`.
    pub async fn create(pool: &PgPool, input: &CreateRespondent) -> Result<Respondent, sqlx::Error> {
        let query = format!(
            "INSERT INTO respondents
                (full_name, email, role, other_role, is_seedling, time_in_seedbed)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Respondent>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(input.role.as_str())
            .bind(&input.other_role)
            .bind(input.is_seedling)
            .bind(input.time_in_seedbed.map(|t| t.as_str()))
            .fetch_one(pool)
            .await
    }

    /// Find a respondent by internal ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Respondent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM respondents WHERE id = $1");
        sqlx::query_as::<_, Respondent>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a respondent by email (exact, case-sensitive match).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Respondent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM respondents WHERE email = $1");
        sqlx::query_as::<_, Respondent>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
