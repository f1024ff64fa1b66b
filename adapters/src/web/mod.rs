mod http;
mod state;
mod websocket;

pub use http::get_lobby;
pub use state::{AppState, create_app_state};
pub use websocket::{IncomingMessage, WebSocketNotifier, handle_connection};
