use axum::{Router, handler::Handler, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod queue;
pub mod root;

pub use queue::queue_route;
pub use root::{health_check_route, index_route};

pub fn app(state: AppState) -> Router {
    // Unknown paths, whatever the method, get the front-end root document
    let static_files = ServeDir::new(&state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(index_route.with_state(state.clone()));

    Router::new()
        .route("/cola", get(queue_route).fallback(index_route))
        .route("/health", get(health_check_route))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
