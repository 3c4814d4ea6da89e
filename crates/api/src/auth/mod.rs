//! Token authentication primitives.
//!
//! - [`jwt`] -- access-token issuance and verification ([`jwt::TokenIssuer`]).
//! - [`clock`] -- the time source injected into the issuer.
//!
//! There is no password module: respondents are identified by email alone.

pub mod clock;
pub mod jwt;
