//! Bearer token issuance and verification.
//!
//! Access tokens are HS256-signed JWTs whose subject is the respondent's
//! email. There are no refresh tokens and no revocation list: a token stays
//! valid until `exp`, even if the respondent it names is later removed.
//!
//! Expiry is checked against the issuer's injected [`Clock`] rather than the
//! library's wall clock, so tests can move time without sleeping.

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::clock::Clock;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject -- the respondent's email.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in days (default: 7).
    pub access_token_expiry_days: i64,
}

/// Default access token expiry in days.
const DEFAULT_ACCESS_EXPIRY_DAYS: i64 = 7;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default |
    /// |--------------------------|----------|---------|
    /// | `JWT_SECRET`             | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_DAYS` | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_days: i64 = std::env::var("JWT_ACCESS_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            access_token_expiry_days,
        }
    }

    /// Access token lifetime in seconds.
    pub fn expiry_secs(&self) -> i64 {
        self.access_token_expiry_days * 24 * 60 * 60
    }
}

/// Why a presented token was rejected.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Malformed token, bad signature, wrong algorithm or missing claims.
    #[error("Invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("Token expired")]
    Expired,

    #[error("Token has an empty subject")]
    EmptySubject,
}

/// Issues and verifies access tokens with one secret and one clock.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: JwtConfig,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub fn new(config: JwtConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    /// Sign a token for `email`, valid for the configured lifetime from now.
    pub fn issue(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = self.clock.now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            exp: now + self.config.expiry_secs(),
            iat: now,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
    }

    /// Check signature and expiry, returning the embedded [`Claims`].
    ///
    /// A token is expired once the clock reaches `exp`; no leeway is applied.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )?
        .claims;

        if claims.exp <= self.clock.now().timestamp() {
            return Err(TokenError::Expired);
        }
        if claims.sub.is_empty() {
            return Err(TokenError::EmptySubject);
        }
        Ok(claims)
    }
}
