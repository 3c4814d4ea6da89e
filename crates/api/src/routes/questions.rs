use axum::routing::get;
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Question routes mounted at `/questions`.
///
/// ```text
/// GET    /                 -> list_questions
/// POST   /                 -> create_question (admin only)
/// GET    /{id}             -> get_question
/// GET    /{id}/options     -> list_question_options
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/{id}", get(questions::get_question))
        .route("/{id}/options", get(questions::list_question_options))
}
