//! Handler for the `/token` resource.
//!
//! Tokens are issued by email lookup alone. The password field is accepted
//! for form compatibility but is not checked against anything: respondents
//! have no stored credential.

use axum::extract::State;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use survey_core::error::CoreError;
use survey_core::survey::ENTITY_RESPONDENT;
use survey_db::repositories::RespondentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// The only grant type the token endpoint understands.
const PASSWORD_GRANT: &str = "password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /token` (`application/x-www-form-urlencoded`).
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// The respondent's email.
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub grant_type: Option<String>,
    pub scope: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/token
///
/// Issue a bearer token for the respondent whose email equals `username`.
pub async fn issue_token(
    State(state): State<AppState>,
    Form(input): Form<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    if let Some(grant) = input.grant_type.as_deref() {
        if !grant.is_empty() && grant != PASSWORD_GRANT {
            return Err(AppError::BadRequest(format!(
                "Unsupported grant_type '{grant}'"
            )));
        }
    }

    let respondent = RespondentRepo::find_by_email(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBy {
                entity: ENTITY_RESPONDENT,
                field: "email",
                value: input.username.clone(),
            })
        })?;

    let access_token = state
        .tokens
        .issue(&respondent.email)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(
        respondent_id = respondent.id,
        password_supplied = !input.password.is_empty(),
        "Access token issued",
    );

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        expires_in: state.tokens.config().expiry_secs(),
    }))
}
