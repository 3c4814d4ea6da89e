//! Bearer-token extractor resolving the calling respondent.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use survey_core::error::CoreError;
use survey_core::roles::Role;
use survey_core::survey::ENTITY_RESPONDENT;
use survey_db::models::respondent::Respondent;
use survey_db::repositories::RespondentRepo;
use survey_db::DbPool;

use crate::auth::jwt::TokenIssuer;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// The respondent behind the request's Bearer token.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(caller: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(respondent_id = caller.respondent.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub respondent: Respondent,
    pub role: Role,
}

/// Verify `token` and load the respondent named by its subject.
///
/// Any verification failure is `Unauthorized`. A valid token whose email no
/// longer matches a respondent is `NotFound`.
pub async fn resolve_caller(
    pool: &DbPool,
    tokens: &TokenIssuer,
    token: &str,
) -> AppResult<Respondent> {
    let claims = tokens.verify(token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AppError::Core(CoreError::Unauthorized("Could not validate credentials".into()))
    })?;

    RespondentRepo::find_by_email(pool, &claims.sub)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBy {
                entity: ENTITY_RESPONDENT,
                field: "email",
                value: claims.sub,
            })
        })
}

/// Extract the credentials from an `Authorization` value.
///
/// The scheme is matched case-insensitively, so `bearer <token>` (as built
/// from the token endpoint's `token_type`) is accepted too.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = bearer_token(auth_header).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let respondent = resolve_caller(&state.pool, &state.tokens, token).await?;
        let role = respondent.parsed_role().map_err(|e| {
            AppError::Core(CoreError::Internal(format!("Stored role is invalid: {e}")))
        })?;

        Ok(AuthUser { respondent, role })
    }
}
