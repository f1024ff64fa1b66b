use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use application::ports::out_::EventNotifier;
use domain::{ConnectionId, ServerEvent};

/// Notifier that keeps every delivered event, for driving the lobby without sockets.
#[derive(Default)]
pub struct RecordingNotifier {
    events: RwLock<Vec<(ConnectionId, ServerEvent)>>,
}

#[async_trait]
impl EventNotifier for RecordingNotifier {
    async fn notify(
        &self,
        connection_id: ConnectionId,
        event: ServerEvent,
    ) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((connection_id, event));
    }
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(ConnectionId, ServerEvent)> {
        self.events.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn events_for(
        &self,
        connection_id: ConnectionId,
    ) -> Vec<ServerEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(id, _)| *id == connection_id)
            .map(|(_, event)| event.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.events.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}
