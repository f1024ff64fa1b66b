use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use domain::LobbySnapshot;

use super::state::AppState;

pub async fn get_lobby(State(state): State<Arc<AppState>>) -> Json<LobbySnapshot> {
    Json(state.lobby_service.snapshot().await)
}
