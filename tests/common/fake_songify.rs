//! Fake Songify API for integration tests.
//!
//! Spins up a minimal `axum` server on a random port bound to 127.0.0.1 and
//! answers `GET /v2/queue` with a canned status and body. Records how often it
//! was hit and the last query string it saw.

use axum::{
    Router,
    extract::{RawQuery, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
}

/// Handle to the running fake API.
pub struct FakeSongify {
    addr: SocketAddr,
    canned: Canned,
}

impl FakeSongify {
    /// Serve `body` with `200 OK`.
    pub async fn start(body: impl Into<String>) -> std::io::Result<Self> {
        Self::start_with_status(StatusCode::OK, body).await
    }

    pub async fn start_with_status(
        status: StatusCode,
        body: impl Into<String>,
    ) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let canned = Canned {
            status,
            body: body.into(),
            hits: Arc::new(AtomicUsize::new(0)),
            last_query: Arc::new(Mutex::new(None)),
        };

        let app = Router::new()
            .route("/v2/queue", get(queue))
            .with_state(canned.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, canned })
    }

    /// Base URL (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.canned.hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.canned.last_query.lock().unwrap().clone()
    }
}

/// Base URL of a port nothing listens on.
pub async fn closed_base_url() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

async fn queue(State(canned): State<Canned>, RawQuery(query): RawQuery) -> impl IntoResponse {
    canned.hits.fetch_add(1, Ordering::SeqCst);
    *canned.last_query.lock().unwrap() = query;
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body.clone(),
    )
}
