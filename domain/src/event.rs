use serde::Serialize;

use crate::{Board, ConnectionId, Mark, Outcome, SessionId};

/// Inputs the lobby reacts to, one per transport event.
#[derive(Clone, Debug, PartialEq)]
pub enum ClientEvent {
    Connected,
    SetName(String),
    Move { session_id: SessionId, position: usize },
    PlayAgain { session_id: SessionId },
    Disconnected,
}

/// Events delivered to a single connection, serialized as `{"event": ..., "data": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    RequestName,
    Waiting(String),
    GameStart {
        player: Mark,
        game_id: SessionId,
        player1: String,
        player2: String,
    },
    UpdateBoard {
        board: Board,
    },
    GameOver {
        winner: Outcome,
    },
    OpponentLeft,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub connection_id: ConnectionId,
    pub event: ServerEvent,
}

impl Notification {
    #[must_use]
    pub fn new(
        connection_id: ConnectionId,
        event: ServerEvent,
    ) -> Self {
        Self { connection_id, event }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn events_use_wire_names() {
        let start = ServerEvent::GameStart {
            player: Mark::O,
            game_id: SessionId::from("a-b"),
            player1: "Ana".into(),
            player2: "Bia".into(),
        };
        assert_eq!(
            serde_json::to_value(&start).unwrap(),
            json!({
                "event": "gameStart",
                "data": { "player": "O", "gameId": "a-b", "player1": "Ana", "player2": "Bia" }
            })
        );

        assert_eq!(
            serde_json::to_value(ServerEvent::GameOver { winner: Outcome::Draw }).unwrap(),
            json!({ "event": "gameOver", "data": { "winner": "Draw" } })
        );
        assert_eq!(
            serde_json::to_value(ServerEvent::Waiting("hold on".into())).unwrap(),
            json!({ "event": "waiting", "data": "hold on" })
        );
        assert_eq!(serde_json::to_value(ServerEvent::OpponentLeft).unwrap(), json!({ "event": "opponentLeft" }));
        assert_eq!(serde_json::to_value(ServerEvent::RequestName).unwrap(), json!({ "event": "requestName" }));
    }
}
