//! Shared helpers for the relay integration harnesses.
//!
//! `mod common; use common::*;` at the top of each harness file.

pub mod fake_songify;

pub use fake_songify::FakeSongify;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, Response},
};
use songify_relay::{AppConfig, AppState, app};
use std::path::PathBuf;
use tower::ServiceExt;

/// The front-end shipped with the crate.
pub fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

/// Relay router pointed at `upstream_base`.
pub fn relay(upstream_base: &str) -> Router {
    let config = AppConfig {
        upstream_base: upstream_base.to_string(),
        public_dir: public_dir(),
        ..AppConfig::default()
    };
    app(AppState::new(config).unwrap())
}

pub async fn send(router: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    router.oneshot(request).await.unwrap()
}

pub async fn get(router: Router, uri: &str) -> Response<Body> {
    send(router, Method::GET, uri).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
