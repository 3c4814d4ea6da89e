//! Handlers for the `/questions` resource.
//!
//! Creating questions is Administrator-only; reading them needs any
//! authenticated respondent.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use survey_core::error::CoreError;
use survey_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use survey_core::question::validate_question_input;
use survey_core::survey::ENTITY_QUESTION;
use survey_core::types::DbId;
use survey_db::models::question::{CreateQuestion, QuestionWithOptions, ResponseOption};
use survey_db::repositories::{QuestionRepo, ResponseOptionRepo};

use crate::error::{conflict_on, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/questions
///
/// Create a question together with its options in one transaction.
pub async fn create_question(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateQuestion>,
) -> AppResult<(StatusCode, Json<DataResponse<QuestionWithOptions>>)> {
    let option_texts: Vec<&str> = input
        .effective_options()
        .iter()
        .map(|o| o.text.as_str())
        .collect();
    validate_question_input(&input.text, &option_texts)?;

    let created = QuestionRepo::create(&state.pool, &input)
        .await
        .map_err(|e| {
            conflict_on(e, "uq_questions_text", "A question with this text already exists")
        })?;

    tracing::info!(
        question_id = created.question.id,
        option_count = created.options.len(),
        respondent_id = admin.respondent.id,
        "Question created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/questions?skip=&limit=
pub async fn list_questions(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<QuestionWithOptions>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.skip);

    let questions = QuestionRepo::list_with_options(&state.pool, limit, offset).await?;

    Ok(Json(DataResponse { data: questions }))
}

/// GET /api/v1/questions/{id}
pub async fn get_question(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<QuestionWithOptions>>> {
    let question = QuestionRepo::find_by_id_with_options(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_QUESTION,
            id,
        }))?;

    Ok(Json(DataResponse { data: question }))
}

/// GET /api/v1/questions/{id}/options
///
/// 404 when the question does not exist or has no options (free text).
pub async fn list_question_options(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ResponseOption>>>> {
    QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_QUESTION,
            id,
        }))?;

    let options = ResponseOptionRepo::list_by_question(&state.pool, id).await?;
    if options.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Response options for question",
            id,
        }));
    }

    Ok(Json(DataResponse { data: options }))
}
