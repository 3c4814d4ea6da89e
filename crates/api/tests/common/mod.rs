#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use survey_api::auth::clock::SystemClock;
use survey_api::auth::jwt::{JwtConfig, TokenIssuer};
use survey_api::config::ServerConfig;
use survey_api::router::build_app_router;
use survey_api::state::AppState;
use survey_core::admin::AdminAllowList;

/// Secret shared by the test app and any tokens forged in tests.
pub const TEST_JWT_SECRET: &str = "test-secret-for-integration-tests";

/// The only email allowed to register as Administrator in tests.
pub const ADMIN_EMAIL: &str = "admin@survey.test";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_days: 7,
        },
        admin_emails: AdminAllowList::parse(ADMIN_EMAIL),
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let tokens = TokenIssuer::new(config.jwt.clone(), Arc::new(SystemClock));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        tokens: Arc::new(tokens),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body. Values must already be
/// URL-safe.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let encoded = fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encoded))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Register a respondent through the API and return the `data` object.
pub async fn register(app: Router, email: &str, role: &str) -> serde_json::Value {
    let body = serde_json::json!({
        "full_name": "Test Respondent",
        "email": email,
        "role": role,
    });
    let response = post_json(app, "/api/v1/respondents", body).await;
    assert_eq!(response.status(), 200, "registration of {email} should succeed");
    body_json(response).await["data"].clone()
}

/// Obtain a bearer token for `email` through the token endpoint.
pub async fn token_for(app: Router, email: &str) -> String {
    let response = post_form(
        app,
        "/api/v1/token",
        &[("username", email), ("password", "irrelevant")],
    )
    .await;
    assert_eq!(response.status(), 200, "token for {email} should be issued");
    body_json(response).await["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}

/// Register the allow-listed administrator and return a token for them.
pub async fn admin_token(app: Router) -> String {
    register(app.clone(), ADMIN_EMAIL, "Administrator").await;
    token_for(app, ADMIN_EMAIL).await
}

/// Register a student and return a token for them.
pub async fn student_token(app: Router, email: &str) -> String {
    register(app.clone(), email, "Student").await;
    token_for(app, email).await
}

/// Create a question as `token` and return the `data` object.
pub async fn create_question(
    app: Router,
    token: &str,
    text: &str,
    question_type: &str,
    options: &[&str],
) -> serde_json::Value {
    let options: Vec<_> = options
        .iter()
        .map(|t| serde_json::json!({ "text": t }))
        .collect();
    let body = serde_json::json!({
        "text": text,
        "type": question_type,
        "options": options,
    });
    let response = post_json_auth(app, "/api/v1/questions", body, token).await;
    assert_eq!(response.status(), 201, "question creation should succeed");
    body_json(response).await["data"].clone()
}
