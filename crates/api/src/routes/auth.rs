use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Token route, merged at the `/api/v1` root.
///
/// ```text
/// POST   /token      -> issue_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/token", post(auth::issue_token))
}
