#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use interview_prep_api::auth::jwt::JwtConfig;
use interview_prep_api::config::ServerConfig;
use interview_prep_api::router::build_app_router;
use interview_prep_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only exact CORS origin plus the
/// `.vercel.app` suffix, and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        cors_origin_suffix: Some(".vercel.app".to_string()),
        request_timeout_secs: 30,
        min_password_length: 6,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 24,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Signup payload with unique email and phone derived from `tag`.
pub fn signup_body(tag: &str, role: &str) -> Value {
    json!({
        "first_name": "Test",
        "last_name": tag,
        "email": format!("{tag}@example.com"),
        "password": "secret1",
        "phone": format!("+1555{tag}"),
        "role": role,
    })
}

/// A signed-up account: its id and bearer token.
pub struct TestUser {
    pub id: i64,
    pub token: String,
}

/// Sign up through the API and return the new account's id and token.
pub async fn signup(app: &Router, tag: &str, role: &str) -> TestUser {
    let response = post_json(app.clone(), "/signup", signup_body(tag, role)).await;
    assert_eq!(response.status(), StatusCode::OK, "signup of {tag} failed");
    let json = body_json(response).await;
    TestUser {
        id: json["user"]["id"].as_i64().unwrap(),
        token: json["token"].as_str().unwrap().to_string(),
    }
}

/// Create a category as `owner` and return its id.
pub async fn create_category(app: &Router, owner: &TestUser, name: &str) -> i64 {
    let response = post_json_auth(
        app.clone(),
        "/api/categories",
        json!({ "name": name }),
        &owner.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
