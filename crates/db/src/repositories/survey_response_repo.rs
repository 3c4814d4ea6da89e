//! Repository for the `survey_responses` table.

use sqlx::PgExecutor;

use crate::models::survey_response::{CreateSurveyResponse, SurveyResponse};

const COLUMNS: &str = "id, respondent_id, question_id, response_option_id, text, created_at";

/// Inserts survey responses.
///
/// This is a bare insert: cross-entity checks (option belongs to question,
/// free-text answers present) are the caller's job and should run in the same
/// transaction.
pub struct SurveyResponseRepo;

impl SurveyResponseRepo {
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateSurveyResponse,
    ) -> Result<SurveyResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO survey_responses (respondent_id, question_id, response_option_id, text)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SurveyResponse>(&query)
            .bind(input.respondent_id)
            .bind(input.question_id)
            .bind(input.response_option_id)
            .bind(&input.text)
            .fetch_one(executor)
            .await
    }
}
