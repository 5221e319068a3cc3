//! Shared helpers for HTTP integration tests.
//!
//! Mirrors the router construction in `main.rs` so tests exercise the same
//! middleware stack (CORS, request ID, timeout, panic recovery) that
//! production uses.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use orchard_api::auth::password::hash_password;
use orchard_api::auth::session::SessionConfig;
use orchard_api::config::ServerConfig;
use orchard_api::routes;
use orchard_api::state::AppState;
use orchard_db::models::staff::CreateStaff;
use orchard_db::repositories::StaffRepo;

/// Build a test `ServerConfig` with safe defaults and a known session secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        allowed_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        google_client_id: None,
        serve_frontend: None,
        session: SessionConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            expiry_hours: 24,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
        http: reqwest::Client::new(),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request with optional JSON body and optional session cookie.
async fn send(
    app: Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    cookie: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str) -> Response {
    send(app, Method::GET, path, None, None).await
}

pub async fn get_auth(app: Router, path: &str, cookie: &str) -> Response {
    send(app, Method::GET, path, None, Some(cookie)).await
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, path, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response {
    send(app, Method::POST, path, Some(body), Some(cookie)).await
}

pub async fn put_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response {
    send(app, Method::PUT, path, Some(body), Some(cookie)).await
}

pub async fn delete_auth(app: Router, path: &str, cookie: &str) -> Response {
    send(app, Method::DELETE, path, None, Some(cookie)).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Extract the `name=value` pair of the session cookie from a response's
/// `Set-Cookie` header, ready to send back in a `Cookie` header.
pub fn session_cookie_from(response: &Response) -> Option<String> {
    let set_cookie = response.headers().get(SET_COOKIE)?.to_str().ok()?;
    set_cookie.split(';').next().map(str::to_string)
}

// ---------------------------------------------------------------------------
// Data helpers
// ---------------------------------------------------------------------------

/// Create a staff account directly in the database with a hashed password.
pub async fn seed_staff(pool: &PgPool, email: &str, password: &str) {
    let hashed = hash_password(password).expect("hashing should succeed");
    StaffRepo::create(
        pool,
        &CreateStaff {
            name: "Test Staff".to_string(),
            email: email.to_string(),
            password_hash: hashed,
            phone: None,
            job: "manager".to_string(),
            location_id: None,
            status: true,
        },
    )
    .await
    .expect("staff creation should succeed");
}

/// Log in through the API and return the session cookie pair.
pub async fn login_session(app: Router, email: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/staff/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie_from(&response).expect("login must set the session cookie")
}

/// Seed a staff account and return a logged-in session cookie.
pub async fn authenticated_session(app: Router, pool: &PgPool) -> String {
    seed_staff(pool, "admin@orchard.test", "integration-pass").await;
    login_session(app, "admin@orchard.test", "integration-pass").await
}
