// config
use std::env;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 3000;

/// Songify public API.
pub const SONGIFY_API_URL: &str = "https://api.songify.rocks";

/// Songify account whose request queue is relayed.
pub const SONGIFY_ACCOUNT_ID: &str = "007dea0d-6420-419b-a2cd-8b09cbea010e";

/// Directory holding the front-end assets.
pub const PUBLIC_DIR: &str = "public";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

/// Process-wide settings, resolved once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of the Songify API, without a trailing slash.
    pub upstream_base: String,
    pub public_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: DEFAULT_PORT,
            upstream_base: SONGIFY_API_URL.to_string(),
            public_dir: PathBuf::from(PUBLIC_DIR),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(env::var("PORT").ok().as_deref())?;
        let config = AppConfig {
            port,
            ..AppConfig::default()
        };
        info!(
            "Config resolved: port={} upstream={} public_dir={:?}",
            config.port, config.upstream_base, config.public_dir
        );
        Ok(config)
    }

    /// Full URL of the queue resource, account id included.
    pub fn queue_url(&self) -> String {
        format!(
            "{}/v2/queue?uuid={}",
            self.upstream_base.trim_end_matches('/'),
            SONGIFY_ACCOUNT_ID
        )
    }

    pub fn index_file(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value.to_string())),
    }
}
