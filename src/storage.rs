//! Webview Storage
//!
//! `localStorage` / `sessionStorage` as session tiers. Falls back to an
//! in-memory tier (nothing survives a reload) when the webview has none.

use tix_core::{ClientConfig, ConfigError, MemoryTier, SessionError, SessionStore, StorageTier};

pub enum WebTier {
    Browser(web_sys::Storage),
    Memory(MemoryTier),
}

impl WebTier {
    fn durable() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self::from_browser(storage, "localStorage")
    }

    fn per_session() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        Self::from_browser(storage, "sessionStorage")
    }

    fn from_browser(storage: Option<web_sys::Storage>, name: &str) -> Self {
        match storage {
            Some(storage) => WebTier::Browser(storage),
            None => {
                log::warn!("{} unavailable, session will not persist", name);
                WebTier::Memory(MemoryTier::new())
            }
        }
    }
}

impl StorageTier for WebTier {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            WebTier::Browser(storage) => storage.get_item(key).ok().flatten(),
            WebTier::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        match self {
            WebTier::Browser(storage) => storage.set_item(key, value).map_err(|e| SessionError::Storage {
                key: key.to_string(),
                message: format!("{:?}", e),
            }),
            WebTier::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            WebTier::Browser(storage) => {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("failed to remove {}: {:?}", key, e);
                }
            }
            WebTier::Memory(memory) => memory.remove(key),
        }
    }
}

pub type WebSessionStore = SessionStore<WebTier, WebTier>;

/// Startup configuration, read from the durable tier
pub fn client_config() -> Result<ClientConfig, ConfigError> {
    let durable = WebTier::durable();
    ClientConfig::from_lookup(|key| durable.get(key))
}

/// Session storage bound to the current webview
pub fn session_store(config: &ClientConfig) -> WebSessionStore {
    SessionStore::new(WebTier::durable(), WebTier::per_session(), config)
}
