//! Application Context
//!
//! Shared state provided via Leptos Context API. Wraps the view controller in
//! a signal so every transition re-renders whatever depends on it.

use leptos::prelude::*;
use tix_core::{AppController, ClientConfig, Overlay, Ticket, User};

use crate::storage::{self, WebSessionStore};

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: RwSignal<AppController>,
    /// Only notifies when the counter itself moves, not on every transition
    refresh: Memo<u32>,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(controller: AppController, config: ClientConfig) -> Self {
        let controller = RwSignal::new(controller);
        Self {
            controller,
            refresh: Memo::new(move |_| controller.with(|c| c.refresh_count())),
            config: StoredValue::new(config),
        }
    }

    /// Rebuild view state from whatever session survived in webview storage
    pub fn restore(config: ClientConfig) -> Self {
        let controller = AppController::restore(&storage::session_store(&config));
        Self::new(controller, config)
    }

    fn session(&self) -> WebSessionStore {
        self.config.with_value(storage::session_store)
    }

    pub fn is_authenticated(&self) -> bool {
        self.controller.with(|c| c.auth().is_authenticated())
    }

    pub fn user(&self) -> Option<User> {
        self.controller.with(|c| c.auth().user().cloned())
    }

    pub fn overlay(&self) -> Overlay {
        self.controller.with(|c| c.overlay().clone())
    }

    /// Changes exactly when the ticket list must be re-fetched
    pub fn refresh_count(&self) -> u32 {
        self.refresh.get()
    }

    pub fn logged_in(&self, user: User, remember_me: bool) {
        let session = self.session();
        self.controller.update(|c| c.logged_in(user, remember_me, &session));
    }

    pub fn logout(&self) {
        let session = self.session();
        self.controller.update(|c| c.logout(&session));
    }

    pub fn select(&self, ticket: Ticket) {
        self.controller.update(|c| c.select(ticket));
    }

    pub fn open_create(&self) {
        self.controller.update(|c| c.open_create());
    }

    pub fn close_overlay(&self) {
        self.controller.update(|c| c.close_overlay());
    }

    pub fn ticket_created(&self) {
        self.controller.update(|c| c.ticket_created());
    }

    pub fn ticket_updated(&self) {
        self.controller.update(|c| c.ticket_updated());
    }
}

/// Get the app context provided by [`crate::app::App`]
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tix_core::{MemoryTier, SessionPersistence, SessionStore};

    fn make_ticket(id: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            category: "Bug".to_string(),
            title: "Login button broken".to_string(),
            description: "Nothing happens on click".to_string(),
            created_date: "2024-01-01T00:00:00Z".to_string(),
            assignee: "admin".to_string(),
            reporter: "user1".to_string(),
            status: "Open".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn logged_in_context() -> AppContext {
        let config = ClientConfig::default();
        let session = SessionStore::new(MemoryTier::new(), MemoryTier::new(), &config);
        let user = User {
            id: "u-1".to_string(),
            username: "admin".to_string(),
            password_hash: String::new(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };
        session.put(&user, true).unwrap();
        AppContext::new(AppController::restore(&session), config)
    }

    #[test]
    fn test_list_refetches_only_on_refresh_increment() {
        let owner = Owner::new();
        owner.set();
        let ctx = logged_in_context();

        let fetches = StoredValue::new(0u32);
        let trigger = Memo::new(move |_| {
            fetches.update_value(|n| *n += 1);
            ctx.refresh_count()
        });
        assert_eq!(trigger.get(), 0);
        assert_eq!(fetches.get_value(), 1);

        ctx.select(make_ticket("t-1"));
        assert_eq!(trigger.get(), 0);
        ctx.close_overlay();
        ctx.open_create();
        ctx.close_overlay();
        assert_eq!(trigger.get(), 0);
        assert_eq!(fetches.get_value(), 1);

        ctx.open_create();
        ctx.ticket_created();
        assert_eq!(trigger.get(), 1);
        assert_eq!(fetches.get_value(), 2);
        assert_eq!(ctx.overlay(), Overlay::None);

        ctx.select(make_ticket("t-1"));
        ctx.ticket_updated();
        assert_eq!(trigger.get(), 2);
        assert_eq!(fetches.get_value(), 3);
    }
}
