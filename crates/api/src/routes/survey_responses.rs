use axum::routing::post;
use axum::Router;

use crate::handlers::survey_responses;
use crate::state::AppState;

/// Survey response routes mounted at `/survey-responses`.
///
/// ```text
/// POST   /           -> submit_response
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(survey_responses::submit_response))
}
