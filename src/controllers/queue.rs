use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
    config::AppConfig,
    controllers::normalizer::extract_songs,
    errors::UpstreamFetchError,
    models::{QueueResponse, SongRecord},
};

/// Relays the Songify request queue. Holds no per-request state.
pub struct QueueController {
    client: Client,
    queue_url: String,
}

impl QueueController {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        QueueController {
            client,
            queue_url: config.queue_url(),
        }
    }

    /// Fetch the queue once and normalize it.
    pub async fn fetch_queue(&self) -> Result<Vec<SongRecord>, UpstreamFetchError> {
        let response = self.client.get(&self.queue_url).send().await?;

        // The body is normalized whatever the status says
        let status = response.status();
        if !status.is_success() {
            warn!("Songify answered {} for the queue, parsing body anyway", status);
        }

        let body = response.text().await?;
        let raw: Value = serde_json::from_str(&body)?;
        let songs = extract_songs(&raw);
        debug!("Songify queue holds {} songs", songs.len());
        Ok(songs)
    }

    pub async fn get_queue(&self) -> Response {
        match self.fetch_queue().await {
            Ok(songs) => (StatusCode::OK, Json(QueueResponse::new(songs))).into_response(),
            Err(e) => {
                error!("Error fetching Songify queue: {}", e);
                e.into_response()
            }
        }
    }
}
