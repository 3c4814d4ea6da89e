//! Handler for the `/survey-responses` resource.

use axum::extract::State;
use axum::Json;
use survey_core::error::CoreError;
use survey_core::survey::{
    ensure_option_belongs, validate_answer_text, ENTITY_QUESTION, ENTITY_RESPONDENT,
};
use survey_db::models::survey_response::{CreateSurveyResponse, SurveyResponse};
use survey_db::repositories::{
    QuestionRepo, RespondentRepo, ResponseOptionRepo, SurveyResponseRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/survey-responses
///
/// Record one answer. The respondent, question and option lookups run in the
/// same transaction as the insert, so nothing is written when any check fails.
pub async fn submit_response(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSurveyResponse>,
) -> AppResult<Json<DataResponse<SurveyResponse>>> {
    let mut tx = state.pool.begin().await?;

    RespondentRepo::find_by_id(&mut *tx, input.respondent_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_RESPONDENT,
            id: input.respondent_id,
        }))?;

    let question = QuestionRepo::find_by_id(&mut *tx, input.question_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_QUESTION,
            id: input.question_id,
        }))?;

    let question_type = question.parsed_type().map_err(|e| {
        AppError::Core(CoreError::Internal(format!(
            "Stored question type is invalid: {e}"
        )))
    })?;
    validate_answer_text(question_type, input.text.as_deref())?;

    if let Some(option_id) = input.response_option_id {
        let option = ResponseOptionRepo::find_by_id(&mut *tx, option_id).await?;
        ensure_option_belongs(option_id, option.map(|o| o.question_id), question.id)?;
    }

    let response = SurveyResponseRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(
        response_id = response.id,
        question_id = response.question_id,
        respondent_id = response.respondent_id,
        caller_id = auth.respondent.id,
        "Survey response recorded",
    );

    Ok(Json(DataResponse { data: response }))
}
