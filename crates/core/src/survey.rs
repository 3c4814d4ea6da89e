//! Consistency rules applied to a survey response before it is inserted.
//!
//! The submit handler resolves the respondent and the question first, then
//! runs [`validate_answer_text`] and finally [`ensure_option_belongs`]. Each
//! check returns the error a client should see for that failure.

use crate::error::CoreError;
use crate::question::QuestionType;
use crate::types::DbId;

pub const ENTITY_RESPONDENT: &str = "Respondent";
pub const ENTITY_QUESTION: &str = "Question";
pub const ENTITY_RESPONSE_OPTION: &str = "Response option";

/// Free-text questions require a non-blank answer.
///
/// Selection questions accept any text, including none.
pub fn validate_answer_text(
    question_type: QuestionType,
    text: Option<&str>,
) -> Result<(), CoreError> {
    if question_type != QuestionType::FreeText {
        return Ok(());
    }
    match text {
        Some(t) if !t.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation(
            "Text response is required for free-text questions".into(),
        )),
    }
}

/// An option may only be referenced by responses to its own question.
///
/// `option_question_id` is the owning question of the looked-up option, or
/// `None` when no option with `option_id` exists. Both failures surface as
/// the same not-found error.
pub fn ensure_option_belongs(
    option_id: DbId,
    option_question_id: Option<DbId>,
    question_id: DbId,
) -> Result<(), CoreError> {
    match option_question_id {
        Some(owner) if owner == question_id => Ok(()),
        _ => Err(CoreError::NotFound {
            entity: ENTITY_RESPONSE_OPTION,
            id: option_id,
        }),
    }
}
