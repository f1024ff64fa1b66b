use std::collections::HashMap;

use crate::{ConnectionId, SessionId};

use super::Session;

#[derive(Clone, Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `session`, replacing any stale entry under the same id.
    pub fn insert(
        &mut self,
        session: Session,
    ) -> Option<Session> {
        self.sessions.insert(session.id().clone(), session)
    }

    #[must_use]
    pub fn get(
        &self,
        session_id: &SessionId,
    ) -> Option<&Session> {
        self.sessions.get(session_id)
    }

    pub fn get_mut(
        &mut self,
        session_id: &SessionId,
    ) -> Option<&mut Session> {
        self.sessions.get_mut(session_id)
    }

    pub fn remove(
        &mut self,
        session_id: &SessionId,
    ) -> Option<Session> {
        self.sessions.remove(session_id)
    }

    #[must_use]
    pub fn session_of(
        &self,
        connection_id: ConnectionId,
    ) -> Option<&Session> {
        self.sessions.values().find(|s| s.contains(connection_id))
    }

    /// Drops every session `connection_id` takes part in and hands them back.
    pub fn remove_all_containing(
        &mut self,
        connection_id: ConnectionId,
    ) -> Vec<Session> {
        let ids: Vec<SessionId> = self
            .sessions
            .values()
            .filter(|s| s.contains(connection_id))
            .map(|s| s.id().clone())
            .collect();
        ids.iter().filter_map(|id| self.sessions.remove(id)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
