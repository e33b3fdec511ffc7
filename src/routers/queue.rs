use axum::{extract::State, response::Response};

use crate::state::AppState;

/// GET /cola - current Songify queue, normalized
pub async fn queue_route(State(state): State<AppState>) -> Response {
    state.queue.get_queue().await
}
