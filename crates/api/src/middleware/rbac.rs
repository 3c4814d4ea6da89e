//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and delegates the decision to the
//! capability checks in `survey_core::roles`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use survey_core::roles::require_admin;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the Administrator role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     // admin is guaranteed to be an Administrator here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_admin(user.role)?;
        Ok(RequireAdmin(user))
    }
}
