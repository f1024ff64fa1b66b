use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{RwLock, mpsc};
use tracing::debug;

use application::ports::out_::EventNotifier;
use domain::{ConnectionId, ServerEvent};

pub(crate) type Outbox = mpsc::UnboundedReceiver<ServerEvent>;

/// Routes events to per-connection outboxes drained by each socket's writer task.
pub struct WebSocketNotifier {
    connections: RwLock<HashMap<ConnectionId, mpsc::UnboundedSender<ServerEvent>>>,
}

impl WebSocketNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    pub async fn register_connection(
        &self,
        connection_id: ConnectionId,
    ) -> Outbox {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.connections.write().await.insert(connection_id, sender);
        receiver
    }

    pub async fn unregister_connection(
        &self,
        connection_id: ConnectionId,
    ) {
        self.connections.write().await.remove(&connection_id);
    }
}

impl Default for WebSocketNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventNotifier for WebSocketNotifier {
    async fn notify(
        &self,
        connection_id: ConnectionId,
        event: ServerEvent,
    ) {
        let connections = self.connections.read().await;
        match connections.get(&connection_id) {
            Some(sender) => {
                if sender.send(event).is_err() {
                    debug!(connection_id = %connection_id, "Outbox closed, event dropped");
                }
            }
            None => debug!(connection_id = %connection_id, "No such connection, event dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_to_registered_outbox_only() {
        let notifier = WebSocketNotifier::new();
        let (a, b) = (ConnectionId::new(), ConnectionId::new());
        let mut outbox = notifier.register_connection(a).await;

        notifier.notify(a, ServerEvent::RequestName).await;
        notifier.notify(b, ServerEvent::OpponentLeft).await;

        assert_eq!(outbox.recv().await, Some(ServerEvent::RequestName));
        assert!(outbox.try_recv().is_err());
    }

    #[tokio::test]
    async fn unregistering_closes_the_outbox() {
        let notifier = WebSocketNotifier::new();
        let a = ConnectionId::new();
        let mut outbox = notifier.register_connection(a).await;

        notifier.unregister_connection(a).await;
        notifier.notify(a, ServerEvent::RequestName).await;

        assert_eq!(outbox.recv().await, None);
    }
}
