mod in_memory;
pub mod web;

pub use in_memory::RecordingNotifier;
pub use web::{AppState, IncomingMessage, WebSocketNotifier, create_app_state, get_lobby, handle_connection};
