use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::{HeaderValue, Method};
use domain::LobbyConfig;
use tower_http::cors::CorsLayer;
use tracing::warn;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Served for any path that is not an API route.
    pub static_dir: PathBuf,
    /// Origins allowed to talk to the server cross-site.
    pub allowed_origins: Vec<String>,
    pub lobby: LobbyConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            static_dir: PathBuf::from("public"),
            allowed_origins: vec!["https://jogo-velha-rh2b.vercel.app".to_owned()],
            lobby: LobbyConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(self.origin_headers())
            .allow_methods([Method::GET, Method::POST])
            .allow_credentials(true)
    }

    fn origin_headers(&self) -> Vec<HeaderValue> {
        self.allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                    None
                }
            })
            .collect()
    }
}
