use thiserror::Error;

use crate::{ConnectionId, Outcome, SessionId};

/// Reasons a move is rejected. None of these reach the client; the move is simply dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoveError {
    #[error("session not found: {0}")]
    UnknownSession(SessionId),

    #[error("position {0} is off the board")]
    OutOfRange(usize),

    #[error("not the turn of connection {0}")]
    NotYourTurn(ConnectionId),

    #[error("cell {0} is already taken")]
    CellOccupied(usize),

    #[error("session already concluded with {0:?}")]
    Concluded(Outcome),
}
