//! Session Persistence
//!
//! Keeps the logged-in user across reloads. "Remember me" puts the record in
//! the durable tier (localStorage in the webview); otherwise it goes to the
//! per-session tier (sessionStorage). Only one tier holds the record at a time.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::config::ClientConfig;
use crate::models::User;

const REMEMBER_FLAG: &str = "true";

/// A flat string key/value store
pub trait StorageTier {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    fn remove(&self, key: &str);
}

/// In-process tier. Used by tests and when the webview exposes no storage.
#[derive(Debug, Default)]
pub struct MemoryTier {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryTier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageTier for MemoryTier {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage write failed for {key}: {message}")]
    Storage { key: String, message: String },
}

/// What was found in storage on startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub user: Option<User>,
    pub remember_me: bool,
}

/// Persistence of the authenticated user, hiding which tier is used
pub trait SessionPersistence {
    /// Store `user`; `durable` selects the tier that survives restarts
    fn put(&self, user: &User, durable: bool) -> Result<(), SessionError>;

    /// Read back the stored user. Missing or unreadable data means logged out.
    fn get(&self) -> StoredSession;

    /// Forget the user in both tiers
    fn clear(&self);
}

/// Session storage over a durable and a per-session tier
#[derive(Debug)]
pub struct SessionStore<D, S> {
    durable: D,
    per_session: S,
    user_key: String,
    remember_key: String,
}

impl<D: StorageTier, S: StorageTier> SessionStore<D, S> {
    pub fn new(durable: D, per_session: S, config: &ClientConfig) -> Self {
        Self {
            durable,
            per_session,
            user_key: config.user_key(),
            remember_key: config.remember_key(),
        }
    }

    pub fn durable(&self) -> &D {
        &self.durable
    }

    pub fn per_session(&self) -> &S {
        &self.per_session
    }

    fn read_user(&self, raw: Option<String>) -> Option<User> {
        let raw = raw?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::debug!("ignoring unreadable stored session: {}", e);
                None
            }
        }
    }
}

impl<D: StorageTier, S: StorageTier> SessionPersistence for SessionStore<D, S> {
    fn put(&self, user: &User, durable: bool) -> Result<(), SessionError> {
        let serialized = serde_json::to_string(user)?;
        if durable {
            self.durable.set(&self.user_key, &serialized)?;
            self.durable.set(&self.remember_key, REMEMBER_FLAG)?;
            self.per_session.remove(&self.user_key);
        } else {
            self.per_session.set(&self.user_key, &serialized)?;
            self.durable.remove(&self.remember_key);
            self.durable.remove(&self.user_key);
        }
        log::debug!("session saved for {} (durable={})", user.username, durable);
        Ok(())
    }

    fn get(&self) -> StoredSession {
        let remember_me = self.durable.get(&self.remember_key).as_deref() == Some(REMEMBER_FLAG);
        let raw = if remember_me {
            self.durable.get(&self.user_key)
        } else {
            self.per_session.get(&self.user_key)
        };
        StoredSession {
            user: self.read_user(raw),
            remember_me,
        }
    }

    fn clear(&self) {
        self.durable.remove(&self.user_key);
        self.durable.remove(&self.remember_key);
        self.per_session.remove(&self.user_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::make_user;

    fn store() -> SessionStore<MemoryTier, MemoryTier> {
        SessionStore::new(MemoryTier::new(), MemoryTier::new(), &ClientConfig::default())
    }

    #[test]
    fn test_remembered_round_trip() {
        let store = store();
        let user = make_user("admin");
        store.put(&user, true).unwrap();

        assert_eq!(
            store.get(),
            StoredSession {
                user: Some(user.clone()),
                remember_me: true
            }
        );
        assert_eq!(store.durable().get("tix_remember_me").as_deref(), Some("true"));
        assert_eq!(
            store.durable().get("tix_user"),
            Some(serde_json::to_string(&user).unwrap())
        );
        assert!(store.per_session().is_empty());
    }

    #[test]
    fn test_session_only_round_trip() {
        let store = store();
        let user = make_user("admin");
        store.put(&user, false).unwrap();

        assert_eq!(
            store.get(),
            StoredSession {
                user: Some(user),
                remember_me: false
            }
        );
        assert!(store.durable().is_empty());
    }

    #[test]
    fn test_switching_tiers_keeps_one_copy() {
        let store = store();
        let user = make_user("admin");

        store.put(&user, false).unwrap();
        store.put(&user, true).unwrap();
        assert!(store.per_session().get("tix_user").is_none());

        store.put(&user, false).unwrap();
        assert!(store.durable().get("tix_user").is_none());
        assert!(store.durable().get("tix_remember_me").is_none());
        assert!(store.per_session().get("tix_user").is_some());
    }

    #[test]
    fn test_clear_forgets_everything() {
        let store = store();
        store.put(&make_user("admin"), true).unwrap();
        store.per_session().set("tix_user", "{}").unwrap();

        store.clear();

        assert_eq!(store.get(), StoredSession::default());
        assert!(store.durable().is_empty());
        assert!(store.per_session().is_empty());
    }

    #[test]
    fn test_malformed_record_is_logged_out() {
        let store = store();
        store.durable().set("tix_remember_me", "true").unwrap();
        store.durable().set("tix_user", "{not json").unwrap();

        let loaded = store.get();
        assert!(loaded.user.is_none());
        assert!(loaded.remember_me);
    }

    #[test]
    fn test_flag_other_than_true_reads_session_tier() {
        let store = store();
        let user = make_user("admin");
        store.durable().set("tix_remember_me", "yes").unwrap();
        store.durable().set("tix_user", &serde_json::to_string(&user).unwrap()).unwrap();

        assert_eq!(store.get(), StoredSession::default());
    }

    #[test]
    fn test_custom_prefix() {
        let config = ClientConfig {
            storage_prefix: "qa".to_string(),
            ..Default::default()
        };
        let store = SessionStore::new(MemoryTier::new(), MemoryTier::new(), &config);
        store.put(&make_user("admin"), true).unwrap();

        assert!(store.durable().get("qa_user").is_some());
        assert_eq!(store.durable().get("qa_remember_me").as_deref(), Some("true"));
    }
}
