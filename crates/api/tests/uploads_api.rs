//! HTTP-level integration tests for uploads and image retrieval.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, IF_NONE_MATCH};
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, build_test_app, build_test_app_with_blobs, get, send_request};
use sitekit_core::blob::LocalBlobStore;
use sitekit_core::hashing::sha256_hex;

const BOUNDARY: &str = "sitekit-test-boundary";

fn multipart_body(field: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(token: Option<&str>, body: Vec<u8>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/upload")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).unwrap()
}

#[tokio::test]
async fn uploaded_file_is_served_back_with_metadata() {
    let app = build_test_app().await;
    let token = app.admin_token().await;
    let png = b"\x89PNG fake image bytes";

    let response = send_request(
        app.app(),
        upload_request(Some(&token), multipart_body("file", "logo.png", "image/png", png)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let url = json["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/api/images/"));
    assert!(url.ends_with("-logo.png"));

    // Keys carry epoch milliseconds, unlike the second-resolution tables.
    let millis: i64 = url
        .trim_start_matches("/api/images/")
        .trim_end_matches("-logo.png")
        .parse()
        .unwrap();
    assert!(millis > 1_000_000_000_000);

    let response = get(app.app(), &url).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/png");
    assert_eq!(
        response.headers()[ETAG].to_str().unwrap(),
        format!("\"{}\"", sha256_hex(png))
    );
    assert!(response.headers()[CACHE_CONTROL]
        .to_str()
        .unwrap()
        .contains("immutable"));
    assert_eq!(body_bytes(response).await, png);
}

#[tokio::test]
async fn matching_if_none_match_yields_not_modified() {
    let app = build_test_app().await;
    let token = app.admin_token().await;

    let response = send_request(
        app.app(),
        upload_request(Some(&token), multipart_body("file", "a.txt", "text/plain", b"hello")),
    )
    .await;
    let url = body_json(response).await["url"].as_str().unwrap().to_string();

    let request = Request::builder()
        .uri(&url)
        .header(IF_NONE_MATCH, format!("\"{}\"", sha256_hex(b"hello")))
        .body(Body::empty())
        .unwrap();
    let response = send_request(app.app(), request).await;
    assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn upload_requires_auth() {
    let app = build_test_app().await;
    let response = send_request(
        app.app(),
        upload_request(None, multipart_body("file", "a.txt", "text/plain", b"x")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn upload_without_file_field_is_bad_request() {
    let app = build_test_app().await;
    let token = app.admin_token().await;

    let response = send_request(
        app.app(),
        upload_request(Some(&token), multipart_body("other", "a.txt", "text/plain", b"x")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "File not found");
}

#[tokio::test]
async fn path_components_are_stripped_from_file_names() {
    let app = build_test_app().await;
    let token = app.admin_token().await;

    let response = send_request(
        app.app(),
        upload_request(
            Some(&token),
            multipart_body("file", "../../etc/passwd", "text/plain", b"x"),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let url = body_json(response).await["url"].as_str().unwrap().to_string();
    assert!(url.ends_with("-passwd"));
    assert!(!url.contains(".."));
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let app = build_test_app().await;
    let token = app.admin_token().await;
    let big = vec![0u8; 2 * 1024 * 1024];

    let response = send_request(
        app.app(),
        upload_request(Some(&token), multipart_body("file", "big.bin", "application/octet-stream", &big)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn unknown_image_is_not_found() {
    let app = build_test_app().await;
    let response = get(app.app(), "/api/images/missing.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Object Not Found");
}

#[tokio::test]
async fn local_store_round_trips_through_http() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::open(dir.path()).await.unwrap();
    let app = build_test_app_with_blobs(Arc::new(store)).await;
    let token = app.admin_token().await;

    let response = send_request(
        app.app(),
        upload_request(Some(&token), multipart_body("file", "doc.pdf", "application/pdf", b"%PDF")),
    )
    .await;
    let url = body_json(response).await["url"].as_str().unwrap().to_string();

    let response = get(app.app(), &url).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/pdf");
    assert_eq!(body_bytes(response).await, b"%PDF");
}

#[tokio::test]
async fn reserved_characters_in_file_names_round_trip() {
    let app = build_test_app().await;
    let token = app.admin_token().await;

    for name in ["a#b.png", "q?x=1.png", "100%25.png", "50%off.png", "my photo.png"] {
        let response = send_request(
            app.app(),
            upload_request(Some(&token), multipart_body("file", name, "image/png", name.as_bytes())),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "{name}");
        let url = body_json(response).await["url"].as_str().unwrap().to_string();

        let response = get(app.app(), &url).await;
        assert_eq!(response.status(), StatusCode::OK, "{name} via {url}");
        assert_eq!(body_bytes(response).await, name.as_bytes());
    }
}

#[tokio::test]
async fn corrupt_metadata_is_a_sanitized_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::open(dir.path()).await.unwrap();
    let app = build_test_app_with_blobs(Arc::new(store)).await;
    let token = app.admin_token().await;

    let response = send_request(
        app.app(),
        upload_request(Some(&token), multipart_body("file", "doc.txt", "text/plain", b"hi")),
    )
    .await;
    let url = body_json(response).await["url"].as_str().unwrap().to_string();
    let key = url.trim_start_matches("/api/images/");
    std::fs::write(dir.path().join(format!("{key}.meta.json")), b"{not json").unwrap();

    let response = get(app.app(), &url).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An internal error occurred");
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn non_multipart_upload_gets_json_error() {
    let app = build_test_app().await;
    let token = app.admin_token().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/upload")
        .header("authorization", format!("Bearer {token}"))
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from("not a form"))
        .unwrap();
    let response = send_request(app.app(), request).await;
    assert!(response.status().is_client_error());
    assert!(body_json(response).await["code"].is_string());
}

#[tokio::test]
async fn sidecar_suffix_is_reserved() {
    let app = build_test_app().await;
    let token = app.admin_token().await;

    let response = send_request(
        app.app(),
        upload_request(Some(&token), multipart_body("file", "x.meta.json", "application/json", b"{}")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
