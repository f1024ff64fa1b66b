use crate::ConnectionId;

/// Holds at most one connection waiting for an opponent.
#[derive(Default, Clone, Debug)]
pub struct WaitingSlot {
    waiting: Option<ConnectionId>,
}

pub enum MatchmakingCommand {
    Join(ConnectionId),
    Leave(ConnectionId),
}

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchmakingOutcome {
    /// Waiting connection first; it plays `X`.
    Matched([ConnectionId; 2]),
    Enqueued(ConnectionId),
    AlreadyWaiting(ConnectionId),
    Dequeued(ConnectionId),
    PlayerNotFound,
}

impl WaitingSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn waiting(&self) -> Option<ConnectionId> {
        self.waiting
    }

    #[must_use]
    pub fn is_waiting(
        &self,
        connection_id: ConnectionId,
    ) -> bool {
        self.waiting == Some(connection_id)
    }

    pub fn handle_command(
        &mut self,
        command: MatchmakingCommand,
    ) -> MatchmakingOutcome {
        match command {
            MatchmakingCommand::Join(connection_id) => match self.waiting {
                Some(waiting) if waiting == connection_id => MatchmakingOutcome::AlreadyWaiting(connection_id),
                Some(waiting) => {
                    self.waiting = None;
                    MatchmakingOutcome::Matched([waiting, connection_id])
                }
                None => {
                    self.waiting = Some(connection_id);
                    MatchmakingOutcome::Enqueued(connection_id)
                }
            },
            MatchmakingCommand::Leave(connection_id) => {
                if self.is_waiting(connection_id) {
                    self.waiting = None;
                    MatchmakingOutcome::Dequeued(connection_id)
                } else {
                    MatchmakingOutcome::PlayerNotFound
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_joiner_waits_and_second_is_matched_behind_it() {
        let (a, b, c) = (ConnectionId::new(), ConnectionId::new(), ConnectionId::new());
        let mut slot = WaitingSlot::new();

        assert_eq!(slot.handle_command(MatchmakingCommand::Join(a)), MatchmakingOutcome::Enqueued(a));
        assert_eq!(slot.handle_command(MatchmakingCommand::Join(b)), MatchmakingOutcome::Matched([a, b]));
        assert_eq!(slot.waiting(), None);
        assert_eq!(slot.handle_command(MatchmakingCommand::Join(c)), MatchmakingOutcome::Enqueued(c));
        assert_eq!(slot.waiting(), Some(c));
    }

    #[test]
    fn waiting_connection_never_matches_itself() {
        let a = ConnectionId::new();
        let mut slot = WaitingSlot::new();
        slot.handle_command(MatchmakingCommand::Join(a));

        assert_eq!(slot.handle_command(MatchmakingCommand::Join(a)), MatchmakingOutcome::AlreadyWaiting(a));
        assert!(slot.is_waiting(a));
    }

    #[test]
    fn leave_clears_only_the_occupant() {
        let (a, b) = (ConnectionId::new(), ConnectionId::new());
        let mut slot = WaitingSlot::new();
        slot.handle_command(MatchmakingCommand::Join(a));

        assert_eq!(slot.handle_command(MatchmakingCommand::Leave(b)), MatchmakingOutcome::PlayerNotFound);
        assert!(slot.is_waiting(a));
        assert_eq!(slot.handle_command(MatchmakingCommand::Leave(a)), MatchmakingOutcome::Dequeued(a));
        assert_eq!(slot.waiting(), None);
        assert_eq!(slot.handle_command(MatchmakingCommand::Leave(a)), MatchmakingOutcome::PlayerNotFound);
    }
}
