use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tracing::{debug, info, warn};

use domain::{ClientEvent, ConnectionId};

use super::message::IncomingMessage;
use super::notifier::Outbox;
use crate::web::state::AppState;

type WebSocketSender = SplitSink<WebSocket, Message>;

pub async fn handle_connection(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| async move {
        let connection_id = ConnectionId::new();
        info!(connection_id = %connection_id, "Player connected");

        let (sender, receiver) = socket.split();
        let outbox = state.notifier.register_connection(connection_id).await;
        tokio::spawn(write_events(connection_id, sender, outbox));

        state.lobby_service.handle(connection_id, ClientEvent::Connected).await;
        handle_messages(connection_id, receiver, &state).await;
        state.lobby_service.handle(connection_id, ClientEvent::Disconnected).await;

        state.notifier.unregister_connection(connection_id).await;
        info!(connection_id = %connection_id, "Player disconnected");
    })
}

async fn handle_messages(
    connection_id: ConnectionId,
    mut receiver: SplitStream<WebSocket>,
    state: &AppState,
) {
    while let Some(Ok(message)) = receiver.next().await {
        match message {
            Message::Text(text) => {
                debug!(connection_id = %connection_id, message = %text.as_str(), "<- Received");
                match serde_json::from_str::<IncomingMessage>(text.as_str()) {
                    Ok(incoming) => state.lobby_service.handle(connection_id, incoming.into()).await,
                    Err(e) => warn!(connection_id = %connection_id, error = %e, "Failed to parse message"),
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
}

/// Drains the connection's outbox onto the socket until either side goes away.
async fn write_events(
    connection_id: ConnectionId,
    mut sender: WebSocketSender,
    mut outbox: Outbox,
) {
    while let Some(event) = outbox.recv().await {
        let text = match serde_json::to_string(&event) {
            Ok(text) => text,
            Err(e) => {
                warn!(connection_id = %connection_id, error = %e, "Failed to encode event");
                continue;
            }
        };
        debug!(connection_id = %connection_id, message = %text, "-> Sending");
        if sender.send(Message::Text(text.into())).await.is_err() {
            debug!(connection_id = %connection_id, "Socket closed, writer stopping");
            break;
        }
    }
    let _ = sender.close().await;
}
