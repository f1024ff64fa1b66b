mod board;
mod event;
mod lobby;
mod matchmaking;
mod session;
mod types;

pub use board::{Board, CELL_COUNT, Mark, Outcome};
pub use event::{ClientEvent, Notification, ServerEvent};
pub use lobby::{Lobby, LobbyConfig, LobbySnapshot};
pub use matchmaking::{MatchmakingCommand, MatchmakingOutcome, WaitingSlot};
pub use session::{MoveError, Session, SessionPhase, SessionRegistry};
pub use types::{ConnectionId, SessionId};
