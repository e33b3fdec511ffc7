use axum::extract::State;
use axum::response::Response;

use crate::controllers::RootController;
use crate::state::AppState;

pub async fn health_check_route() -> Response {
    RootController::health_check().await
}

pub async fn index_route(State(state): State<AppState>) -> Response {
    RootController::index(&state.config.index_file()).await
}
