//! Shared utilities for integration tests.

use axum::body::Body;
use axum::http::header::ACCEPT;
use axum::http::{HeaderMap, Request};

/// Build a GET request carrying the given Accept header.
pub fn request_with_accept(header: &str) -> Request<Body> {
    Request::builder()
        .uri("/")
        .header(ACCEPT, header)
        .body(Body::empty())
        .unwrap()
}

/// Build a GET request with no Accept header at all.
#[allow(dead_code)]
pub fn request_without_accept() -> Request<Body> {
    Request::builder().uri("/").body(Body::empty()).unwrap()
}

/// Handler that echoes back the Accept header it received.
pub async fn echo_accept(headers: HeaderMap) -> String {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("(none)")
        .to_string()
}
