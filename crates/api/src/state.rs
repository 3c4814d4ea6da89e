use std::sync::Arc;

use crate::auth::jwt::TokenIssuer;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: survey_db::DbPool,
    /// Server configuration, including the admin allow-list.
    pub config: Arc<ServerConfig>,
    /// Signs and verifies bearer tokens.
    pub tokens: Arc<TokenIssuer>,
}
