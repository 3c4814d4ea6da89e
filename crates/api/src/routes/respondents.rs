use axum::routing::{get, post};
use axum::Router;

use crate::handlers::respondents;
use crate::state::AppState;

/// Respondent routes mounted at `/respondents`.
///
/// ```text
/// POST   /           -> create_respondent
/// GET    /me         -> get_me
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(respondents::create_respondent))
        .route("/me", get(respondents::get_me))
}
