use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Message shown to the front-end whenever the queue cannot be relayed.
pub const QUEUE_UNAVAILABLE: &str = "No se pudo obtener la cola desde Songify";

/// Anything that goes wrong between sending the upstream request and holding
/// its parsed body. Callers see one failure; the variants only feed the log.
#[derive(Error, Debug)]
pub enum UpstreamFetchError {
    #[error("Songify request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Songify body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl IntoResponse for UpstreamFetchError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(QUEUE_UNAVAILABLE)),
        )
            .into_response()
    }
}
