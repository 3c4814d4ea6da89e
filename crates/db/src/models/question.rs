//! Question and response option models and DTOs.
//!
//! A question owns zero or more response options. Options are only written
//! together with their question; free-text questions never get any.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use survey_core::error::CoreError;
use survey_core::question::QuestionType;
use survey_core::types::{DbId, Timestamp};

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: String,
    pub created_at: Timestamp,
}

impl Question {
    pub fn parsed_type(&self) -> Result<QuestionType, CoreError> {
        QuestionType::from_str_db(&self.question_type)
    }
}

/// A row from the `response_options` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResponseOption {
    pub id: DbId,
    pub question_id: DbId,
    pub text: String,
    pub created_at: Timestamp,
}

/// A question enriched with its options, ordered by option id.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionWithOptions {
    #[serde(flatten)]
    pub question: Question,
    pub options: Vec<ResponseOption>,
}

/// DTO for one option supplied with a new question.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponseOption {
    pub text: String,
}

/// DTO for creating a question.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Ignored for free-text questions.
    #[serde(default)]
    pub options: Vec<CreateResponseOption>,
}

impl CreateQuestion {
    /// Option labels that will actually be persisted for this question.
    pub fn effective_options(&self) -> &[CreateResponseOption] {
        if self.question_type.has_options() {
            &self.options
        } else {
            &[]
        }
    }
}
