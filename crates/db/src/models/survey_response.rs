//! Survey response model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use survey_core::types::{DbId, Timestamp};

/// A row from the `survey_responses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SurveyResponse {
    pub id: DbId,
    pub respondent_id: DbId,
    pub question_id: DbId,
    pub response_option_id: Option<DbId>,
    pub text: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for submitting one answer.
///
/// The answer body travels as `text`, the same key the stored row uses.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSurveyResponse {
    pub respondent_id: DbId,
    pub question_id: DbId,
    pub response_option_id: Option<DbId>,
    pub text: Option<String>,
}
