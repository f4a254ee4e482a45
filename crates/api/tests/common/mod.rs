#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sitekit_core::blob::{BlobStore, MemoryBlobStore};
use sitekit_db::DbPool;
use tower::ServiceExt;

use sitekit_api::bootstrap::seed_admin;
use sitekit_api::config::{AdminSeed, ServerConfig};
use sitekit_api::router::build_app_router;
use sitekit_api::state::AppState;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        blob_dir: String::new(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        session_ttl_hours: 24,
        admin_seed: Some(AdminSeed {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        }),
    }
}

/// A fully wired application over an in-memory record store.
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    pub blobs: Arc<dyn BlobStore>,
}

impl TestApp {
    /// Clone of the router for a single `oneshot` request.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Log in as the seeded admin and return the bearer token.
    pub async fn admin_token(&self) -> String {
        let body = serde_json::json!({
            "username": ADMIN_USERNAME,
            "password": ADMIN_PASSWORD,
        });
        let response = post_json(self.app(), "/api/admin/login", body).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        json["token"]
            .as_str()
            .expect("login response must carry a token")
            .to_string()
    }
}

/// Build the app with a memory blob store and the seeded admin.
pub async fn build_test_app() -> TestApp {
    build_test_app_with_blobs(Arc::new(MemoryBlobStore::new())).await
}

/// Build the app over the given blob store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub async fn build_test_app_with_blobs(blobs: Arc<dyn BlobStore>) -> TestApp {
    let config = test_config();
    let pool = sitekit_db::open_in_memory()
        .await
        .expect("in-memory database should open");

    if let Some(seed) = &config.admin_seed {
        seed_admin(&pool, seed)
            .await
            .expect("admin seed should succeed");
    }

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        blobs: Arc::clone(&blobs),
    };

    TestApp {
        router: build_app_router(state, &config),
        pool,
        blobs,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should complete")
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_empty_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a raw request (for custom headers or bodies).
pub async fn send_request(app: Router, request: Request<Body>) -> Response {
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
