use axum::{
    extract::Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use std::path::Path;
use tracing::warn;

pub struct RootController;

impl RootController {
    pub async fn health_check() -> Response {
        (StatusCode::OK, Json(json!({"status": "ok"}))).into_response()
    }

    /// Serve the front-end root document for any path without a static asset.
    pub async fn index(index_file: &Path) -> Response {
        match tokio::fs::read_to_string(index_file).await {
            Ok(document) => Html(document).into_response(),
            Err(e) => {
                warn!("Could not read {:?}: {}", index_file, e);
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}
