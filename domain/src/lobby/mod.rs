//! Process-wide lobby state: display names, the waiting slot and every live session.
//!
//! All handlers are synchronous and return the notifications to deliver, so a caller that
//! serializes calls to [`Lobby::handle`] gets each event applied atomically.

mod config;


use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    ClientEvent, ConnectionId, Mark, MatchmakingCommand, MatchmakingOutcome, MoveError, Notification, ServerEvent, Session,
    SessionId, SessionPhase, SessionRegistry, WaitingSlot,
};

pub use config::LobbyConfig;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LobbySnapshot {
    pub connected: usize,
    pub waiting: Option<ConnectionId>,
    pub sessions: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Lobby {
    config: LobbyConfig,
    connections: HashSet<ConnectionId>,
    names: HashMap<ConnectionId, String>,
    slot: WaitingSlot,
    sessions: SessionRegistry,
}

impl Lobby {
    #[must_use]
    pub fn new(config: LobbyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn handle(
        &mut self,
        connection_id: ConnectionId,
        event: ClientEvent,
    ) -> Vec<Notification> {
        match event {
            ClientEvent::Connected => {
                self.connections.insert(connection_id);
                vec![Notification::new(connection_id, ServerEvent::RequestName)]
            }
            ClientEvent::SetName(name) => self.declare_identity(connection_id, name),
            ClientEvent::Move { session_id, position } => self
                .apply_move(connection_id, &session_id, position)
                .unwrap_or_else(|err| {
                    debug!(connection_id = %connection_id, session_id = %session_id, error = %err, "Move ignored");
                    Vec::new()
                }),
            ClientEvent::PlayAgain { session_id } => self.request_rematch(connection_id, &session_id),
            ClientEvent::Disconnected => self.disconnect(connection_id),
        }
    }

    /// Records the display name and pairs the connection with whoever is waiting, or makes it
    /// wait. A connection that already waits or sits in a session only gets its name updated.
    pub fn declare_identity(
        &mut self,
        connection_id: ConnectionId,
        name: String,
    ) -> Vec<Notification> {
        self.connections.insert(connection_id);
        self.names.insert(connection_id, name);

        if self.slot.is_waiting(connection_id) || self.sessions.session_of(connection_id).is_some() {
            debug!(connection_id = %connection_id, "Name updated without re-pairing");
            return Vec::new();
        }
        self.enter_matchmaking(connection_id)
    }

    pub fn apply_move(
        &mut self,
        connection_id: ConnectionId,
        session_id: &SessionId,
        position: usize,
    ) -> Result<Vec<Notification>, MoveError> {
        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| MoveError::UnknownSession(session_id.clone()))?;
        let notifications = session.apply_move(connection_id, position)?;

        if let SessionPhase::Concluded(outcome) = session.phase() {
            info!(session_id = %session_id, outcome = ?outcome, "Session concluded");
        }
        Ok(notifications)
    }

    /// Drops the finished session and sends only the requester back into matchmaking. A session
    /// the requester does not play in stays registered.
    pub fn request_rematch(
        &mut self,
        connection_id: ConnectionId,
        session_id: &SessionId,
    ) -> Vec<Notification> {
        self.connections.insert(connection_id);
        match self.sessions.get(session_id) {
            Some(session) if session.contains(connection_id) => {
                self.sessions.remove(session_id);
                info!(session_id = %session_id, "Session closed for rematch");
            }
            Some(_) => debug!(connection_id = %connection_id, session_id = %session_id, "Foreign session left in place"),
            None => {}
        }

        if let Some(session) = self.sessions.session_of(connection_id) {
            debug!(connection_id = %connection_id, session_id = %session.id(), "Rematch ignored while seated");
            return Vec::new();
        }
        self.enter_matchmaking(connection_id)
    }

    pub fn disconnect(
        &mut self,
        connection_id: ConnectionId,
    ) -> Vec<Notification> {
        if let MatchmakingOutcome::Dequeued(_) = self.slot.handle_command(MatchmakingCommand::Leave(connection_id)) {
            info!(connection_id = %connection_id, "Waiting connection left");
        }

        let notifications = self
            .sessions
            .remove_all_containing(connection_id)
            .into_iter()
            .filter_map(|session| {
                info!(session_id = %session.id(), connection_id = %connection_id, "Session abandoned");
                session.opponent_of(connection_id)
            })
            .map(|opponent| Notification::new(opponent, ServerEvent::OpponentLeft))
            .collect();

        self.names.remove(&connection_id);
        self.connections.remove(&connection_id);
        notifications
    }

    #[must_use]
    pub fn snapshot(&self) -> LobbySnapshot {
        LobbySnapshot {
            connected: self.connections.len(),
            waiting: self.slot.waiting(),
            sessions: self.sessions.len(),
        }
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    #[must_use]
    pub fn name_of(
        &self,
        connection_id: ConnectionId,
    ) -> Option<&str> {
        self.names.get(&connection_id).map(String::as_str)
    }

    fn enter_matchmaking(
        &mut self,
        connection_id: ConnectionId,
    ) -> Vec<Notification> {
        match self.slot.handle_command(MatchmakingCommand::Join(connection_id)) {
            MatchmakingOutcome::Matched([first, second]) => self.start_session(first, second),
            MatchmakingOutcome::Enqueued(waiting) | MatchmakingOutcome::AlreadyWaiting(waiting) => {
                debug!(connection_id = %waiting, "Waiting for opponent");
                vec![Notification::new(waiting, ServerEvent::Waiting(self.config.waiting_message.clone()))]
            }
            MatchmakingOutcome::Dequeued(_) | MatchmakingOutcome::PlayerNotFound => Vec::new(),
        }
    }

    fn start_session(
        &mut self,
        first: ConnectionId,
        second: ConnectionId,
    ) -> Vec<Notification> {
        let session = Session::new(first, second);
        let game_id = session.id().clone();
        let player1 = self.names.get(&first).cloned().unwrap_or_default();
        let player2 = self.names.get(&second).cloned().unwrap_or_default();

        if self.sessions.insert(session).is_some() {
            debug!(session_id = %game_id, "Replaced stale session");
        }
        info!(session_id = %game_id, player1 = %player1, player2 = %player2, "Session started");

        [(first, Mark::X), (second, Mark::O)]
            .into_iter()
            .map(|(connection_id, player)| {
                Notification::new(
                    connection_id,
                    ServerEvent::GameStart {
                        player,
                        game_id: game_id.clone(),
                        player1: player1.clone(),
                        player2: player2.clone(),
                    },
                )
            })
            .collect()
    }
}
