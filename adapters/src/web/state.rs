use std::sync::Arc;

use application::ports::in_::LobbyService;
use application::ports::out_::EventNotifier;
use domain::LobbyConfig;

use super::websocket::WebSocketNotifier;

pub struct AppState {
    pub notifier: Arc<WebSocketNotifier>,
    pub lobby_service: Arc<LobbyService>,
}

impl AppState {
    pub fn new(
        notifier: Arc<WebSocketNotifier>,
        lobby_service: Arc<LobbyService>,
    ) -> Self {
        Self {
            notifier,
            lobby_service,
        }
    }
}

pub fn create_app_state(config: LobbyConfig) -> Arc<AppState> {
    let notifier = Arc::new(WebSocketNotifier::new());
    let event_notifier: Arc<dyn EventNotifier> = notifier.clone();
    let lobby_service = LobbyService::new(config, event_notifier);

    Arc::new(AppState::new(notifier, Arc::new(lobby_service)))
}
