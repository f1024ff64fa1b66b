use serde::Deserialize;

use domain::{ClientEvent, SessionId};

/// Frames a client may send, as `{"event": ..., "data": ...}` text.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum IncomingMessage {
    SetName(String),
    Move { game_id: SessionId, position: usize },
    PlayAgain { game_id: SessionId },
}

impl From<IncomingMessage> for ClientEvent {
    fn from(message: IncomingMessage) -> Self {
        match message {
            IncomingMessage::SetName(name) => ClientEvent::SetName(name),
            IncomingMessage::Move { game_id, position } => ClientEvent::Move {
                session_id: game_id,
                position,
            },
            IncomingMessage::PlayAgain { game_id } => ClientEvent::PlayAgain { session_id: game_id },
        }
    }
}
