//! Handlers for the `/respondents` resource.

use axum::extract::State;
use axum::Json;
use survey_core::admin::authorize_registration;
use survey_core::error::CoreError;
use survey_db::models::respondent::{CreateRespondent, Respondent};
use survey_db::repositories::RespondentRepo;
use validator::Validate;

use crate::error::{conflict_on, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/respondents
///
/// Register a respondent. Public, except that the Administrator role is only
/// granted to emails on the configured allow-list.
pub async fn create_respondent(
    State(state): State<AppState>,
    Json(input): Json<CreateRespondent>,
) -> AppResult<Json<DataResponse<Respondent>>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    authorize_registration(input.role, &input.email, &state.config.admin_emails)?;

    let respondent = RespondentRepo::create(&state.pool, &input)
        .await
        .map_err(|e| conflict_on(e, "uq_respondents_email", "Email already registered"))?;

    tracing::info!(
        respondent_id = respondent.id,
        role = %respondent.role,
        "Respondent registered",
    );

    Ok(Json(DataResponse { data: respondent }))
}

/// GET /api/v1/respondents/me
pub async fn get_me(auth: AuthUser) -> Json<DataResponse<Respondent>> {
    Json(DataResponse {
        data: auth.respondent,
    })
}
