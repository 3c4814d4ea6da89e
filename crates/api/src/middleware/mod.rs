//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the calling respondent from a Bearer token.
//! - [`rbac::RequireAdmin`] -- Additionally requires the Administrator role.

pub mod auth;
pub mod rbac;
