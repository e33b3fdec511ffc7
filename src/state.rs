use std::sync::Arc;

use reqwest::Client;

use crate::{config::AppConfig, controllers::QueueController};

/// Shared by every handler. Immutable once built.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub queue: Arc<QueueController>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("songify-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let queue = QueueController::new(client, &config);
        Ok(AppState {
            config: Arc::new(config),
            queue: Arc::new(queue),
        })
    }
}
