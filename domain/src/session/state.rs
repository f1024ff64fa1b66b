use crate::{Board, CELL_COUNT, ConnectionId, Mark, Notification, Outcome, ServerEvent, SessionId};

use super::MoveError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    Concluded(Outcome),
}

/// One game between two connections. The first participant plays `X` and moves first.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    participants: [ConnectionId; 2],
    board: Board,
    turn: Mark,
    phase: SessionPhase,
}

impl Session {
    #[must_use]
    pub fn new(
        first: ConnectionId,
        second: ConnectionId,
    ) -> Self {
        Self {
            id: SessionId::for_pair(first, second),
            participants: [first, second],
            board: Board::new(),
            turn: Mark::X,
            phase: SessionPhase::InProgress,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn contains(
        &self,
        connection_id: ConnectionId,
    ) -> bool {
        self.participants.contains(&connection_id)
    }

    #[must_use]
    pub fn mark_of(
        &self,
        connection_id: ConnectionId,
    ) -> Option<Mark> {
        self.participants
            .iter()
            .position(|&p| p == connection_id)
            .and_then(Mark::from_index)
    }

    #[must_use]
    pub fn opponent_of(
        &self,
        connection_id: ConnectionId,
    ) -> Option<ConnectionId> {
        self.mark_of(connection_id)
            .map(|mark| self.participants[mark.opponent().index()])
    }

    /// Places the current player's mark and reports the new board, plus the outcome if the move
    /// ended the game. Rejected moves leave the session untouched.
    pub fn apply_move(
        &mut self,
        connection_id: ConnectionId,
        position: usize,
    ) -> Result<Vec<Notification>, MoveError> {
        if let SessionPhase::Concluded(outcome) = self.phase {
            return Err(MoveError::Concluded(outcome));
        }
        if position >= CELL_COUNT {
            return Err(MoveError::OutOfRange(position));
        }
        if self.participants[self.turn.index()] != connection_id {
            return Err(MoveError::NotYourTurn(connection_id));
        }
        if !self.board.place(position, self.turn) {
            return Err(MoveError::CellOccupied(position));
        }

        let outcome = self.board.outcome();
        match outcome {
            Some(outcome) => self.phase = SessionPhase::Concluded(outcome),
            None => self.turn = self.turn.opponent(),
        }

        Ok(self
            .participants
            .iter()
            .flat_map(|&participant| {
                let update = Notification::new(
                    participant,
                    ServerEvent::UpdateBoard {
                        board: self.board.clone(),
                    },
                );
                let game_over = outcome.map(|winner| Notification::new(participant, ServerEvent::GameOver { winner }));
                std::iter::once(update).chain(game_over)
            })
            .collect())
    }
}
