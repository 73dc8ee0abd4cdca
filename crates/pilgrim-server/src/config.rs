//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Tile URL template handed to map clients. Tiles are an opaque
    /// third-party collaborator; the server never fetches them itself.
    pub tile_url: String,
    pub tile_attribution: String,
    pub assist_base_url: String,
    pub assist_model: String,
    pub assist_api_key: Option<String>,
    /// Crowd simulation cadence in seconds.
    pub crowd_tick_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PILGRIM_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            tile_url: env::var("PILGRIM_TILE_URL").unwrap_or_else(|_| {
                "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
            }),
            tile_attribution: env::var("PILGRIM_TILE_ATTRIBUTION")
                .unwrap_or_else(|_| "(c) OpenStreetMap contributors".to_string()),
            assist_base_url: env::var("PILGRIM_ASSIST_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            assist_model: env::var("PILGRIM_ASSIST_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            assist_api_key: env::var("PILGRIM_ASSIST_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            crowd_tick_secs: env::var("PILGRIM_CROWD_TICK_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        }
    }
}
