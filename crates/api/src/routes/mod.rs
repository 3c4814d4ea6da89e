pub mod auth;
pub mod health;
pub mod questions;
pub mod respondents;
pub mod survey_responses;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /token                           issue bearer token (public, form body)
///
/// /respondents                     register (public)
/// /respondents/me                  current respondent (requires auth)
///
/// /questions                       list (auth), create (admin only)
/// /questions/{id}                  get with options (auth)
/// /questions/{id}/options          list options (auth)
///
/// /survey-responses                submit an answer (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/respondents", respondents::router())
        .nest("/questions", questions::router())
        .nest("/survey-responses", survey_responses::router())
}
