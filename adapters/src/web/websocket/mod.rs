mod handler;
mod message;
mod notifier;

pub use handler::handle_connection;
pub use message::IncomingMessage;
pub use notifier::WebSocketNotifier;
