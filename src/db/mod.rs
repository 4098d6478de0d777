//! Browser-local persistence: the signed-in session and small settings blobs.
//! Native builds carry no-op fallbacks so the crate still links there.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SESSION_KEY: &str = "mediashelf.session";
#[cfg(target_arch = "wasm32")]
const SERVER_KEY: &str = "mediashelf.server";
#[cfg(target_arch = "wasm32")]
const PLAYER_KEY: &str = "mediashelf.player";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8002";
pub const DEFAULT_VOLUME: f64 = 0.8;

/// What the backend handed us at login. The token is opaque here; issuance
/// and validation belong to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub username: String,
    pub token: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    pub volume: f64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_session() -> Option<AuthSession> {
    LocalStorage::get(SESSION_KEY).ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_session() -> Option<AuthSession> {
    None
}

pub fn save_session(session: &AuthSession) {
    #[cfg(target_arch = "wasm32")]
    let _ = LocalStorage::set(SESSION_KEY, session);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = session;
}

pub fn clear_session() {
    #[cfg(target_arch = "wasm32")]
    LocalStorage::delete(SESSION_KEY);
}

#[cfg(target_arch = "wasm32")]
pub fn load_server_settings() -> ServerSettings {
    LocalStorage::get(SERVER_KEY).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_server_settings() -> ServerSettings {
    ServerSettings::default()
}

pub fn save_server_settings(settings: &ServerSettings) {
    #[cfg(target_arch = "wasm32")]
    let _ = LocalStorage::set(SERVER_KEY, settings);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = settings;
}

#[cfg(target_arch = "wasm32")]
pub fn load_player_settings() -> PlayerSettings {
    LocalStorage::get(PLAYER_KEY).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_player_settings() -> PlayerSettings {
    PlayerSettings::default()
}

pub fn save_player_settings(settings: &PlayerSettings) {
    #[cfg(target_arch = "wasm32")]
    let _ = LocalStorage::set(PLAYER_KEY, settings);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = settings;
}
