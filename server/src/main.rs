mod config;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tracing::info;

use adapters::{create_app_state, get_lobby, handle_connection};
use config::ServerConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::default();
    let app_state = create_app_state(config.lobby.clone());

    let app = Router::new()
        .route("/ws", get(handle_connection))
        .route("/lobby", get(get_lobby))
        .with_state(app_state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(config.cors_layer());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Server listening");
    axum::serve(listener, app).await?;
    info!("Server shut down");
    Ok(())
}
