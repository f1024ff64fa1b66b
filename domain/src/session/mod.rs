mod error;
mod registry;
mod state;


pub use error::MoveError;
pub use registry::SessionRegistry;
pub use state::{Session, SessionPhase};
