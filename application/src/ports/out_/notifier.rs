use async_trait::async_trait;

use domain::{ConnectionId, ServerEvent};

/// Delivers an event to one connection. Unknown or closed connections are skipped.
#[async_trait]
pub trait EventNotifier: Send + Sync {
    async fn notify(
        &self,
        connection_id: ConnectionId,
        event: ServerEvent,
    );
}
